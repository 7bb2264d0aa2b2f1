//! Application shell: sidebar navigation plus the active screen.
//!
//! Navigation is a plain signal holding the active [`Screen`]; the
//! console is a single-page tool and carries no URL router.

use leptos::prelude::*;

use crate::domain::companies::ui::list::CompaniesListPage;
use crate::domain::plans::ui::list::PlansListPage;
use crate::domain::users::ui::list::UsersListPage;
use crate::shared::icons::icon;
use crate::system::activity::ui::list::UserActivitiesPage;
use crate::system::audit::ui::list::AuditLogsPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Users,
    Companies,
    Plans,
    AuditLogs,
    UserActivity,
}

impl Screen {
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Users => "Users",
            Screen::Companies => "Companies",
            Screen::Plans => "Insurance Plans",
            Screen::AuditLogs => "Audit Logs",
            Screen::UserActivity => "User Activity",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            Screen::Users => "users",
            Screen::Companies => "companies",
            Screen::Plans => "plans",
            Screen::AuditLogs => "audit",
            Screen::UserActivity => "activity",
        }
    }

    const ALL: [Screen; 5] = [
        Screen::Users,
        Screen::Companies,
        Screen::Plans,
        Screen::AuditLogs,
        Screen::UserActivity,
    ];
}

#[component]
pub fn Sidebar(active: RwSignal<Screen>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__brand-title">"Brokerage Console"</span>
            </div>
            <nav class="sidebar__nav">
                {Screen::ALL.iter().copied().map(|screen| {
                    view! {
                        <button
                            class="sidebar__item"
                            class:sidebar__item--active=move || active.get() == screen
                            on:click=move |_| active.set(screen)
                        >
                            <span class="sidebar__item-icon">{icon(screen.icon_name())}</span>
                            <span class="sidebar__item-label">{screen.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}

/// Sidebar plus the active screen. Screens are remounted on switch,
/// so each visit starts from a fresh fetch.
#[component]
pub fn AppShell() -> impl IntoView {
    let active = RwSignal::new(Screen::Users);

    view! {
        <div class="app-shell">
            <Sidebar active=active />
            <div class="app-shell__main">
                <header class="top-header">
                    <span class="top-header__screen">{move || active.get().label()}</span>
                    <span class="top-header__user">"admin@brokerage.co.ke"</span>
                </header>
                <main class="app-shell__content">
                {move || match active.get() {
                    Screen::Users => view! { <UsersListPage /> }.into_any(),
                    Screen::Companies => view! { <CompaniesListPage /> }.into_any(),
                    Screen::Plans => view! { <PlansListPage /> }.into_any(),
                    Screen::AuditLogs => view! { <AuditLogsPage /> }.into_any(),
                    Screen::UserActivity => view! { <UserActivitiesPage /> }.into_any(),
                }}
                </main>
            </div>
        </div>
    }
}
