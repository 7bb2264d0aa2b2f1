use contracts::domain::users::UserRecord;
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::users::api;
use crate::domain::users::ui::details::UserDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::date_utils::{format_datetime, format_datetime_opt};
use crate::shared::filter::Criterion;
use crate::shared::icons::icon;
use crate::shared::list_state::{FetchMode, ListState};
use crate::shared::modal::ModalService;

fn equals_value(state: &ListState<UserRecord>, field: &str) -> String {
    match state.criteria.get(field) {
        Some(Criterion::Equals(v)) => v.clone(),
        _ => String::new(),
    }
}

/// User management screen: searchable, sortable, client-paginated
/// list with create/edit/delete dialogs.
#[component]
pub fn UsersListPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<UserRecord>::new(
        FetchMode::ClientPaged,
        "first_name",
    ));
    let modal = use_context::<ModalService>().expect("ModalService not found in context");
    let is_filter_expanded = RwSignal::new(true);

    let load = move || {
        let token = state.write().begin_fetch();
        spawn_local(async move {
            let result = api::fetch_users().await;
            state.update(|s| {
                s.apply_source(token, result);
            });
        });
    };

    let open_details = move |user: Option<UserRecord>| {
        modal.open(move |handle| {
            let on_saved = Rc::new({
                let handle = handle.clone();
                move |_| {
                    handle.close();
                    load();
                }
            });
            let on_cancel = Rc::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <UserDetails user=user.clone() on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    let confirm_delete = move |user: UserRecord| {
        let message = format!("Delete user \"{}\"? This cannot be undone.", user.full_name());
        modal.open(move |handle| {
            let id = user.id.clone();
            let on_confirm = Rc::new({
                let handle = handle.clone();
                move |_| {
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        match api::delete_user(&id).await {
                            Ok(()) => {
                                handle.close();
                                load();
                            }
                            Err(e) => {
                                // List content is untouched, only the
                                // banner reports the failure.
                                state.update(|s| s.error = Some(e.message()));
                                handle.close();
                            }
                        }
                    });
                }
            });
            let on_cancel = Rc::new({
                let handle = handle.clone();
                move |_| handle.close()
            });
            view! {
                <ConfirmDialog
                    title="Delete user"
                    message=message.clone()
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            }
            .into_any()
        });
    };

    load();

    let search_value = Signal::derive(move || {
        state.with(|s| match s.criteria.get("search") {
            Some(Criterion::Contains(v)) => v.clone(),
            _ => String::new(),
        })
    });
    let sort_field = Signal::derive(move || state.with(|s| s.sort.field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort.is_ascending()));
    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Management"</h1>
                    <span class="badge">{move || state.with(|s| s.page.total_count.to_string())}</span>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        " New User"
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <ErrorBanner message=Signal::derive(move || state.with(|s| s.error.clone())) />

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=Signal::derive(move || state.with(|s| s.criteria.active_count()))
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page.index))
                        total_pages=Signal::derive(move || state.with(|s| s.page.page_count()))
                        total_count=Signal::derive(move || state.with(|s| s.page.total_count))
                        page_size=Signal::derive(move || state.with(|s| s.page.size))
                        on_page_change=Callback::new(move |page| state.update(|s| s.go_to_page(page)))
                        on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                    />
                }.into_any()
                filter_content=move || view! {
                    <div class="filter-row">
                        <SearchInput
                            value=search_value
                            on_change=Callback::new(move |text: String| {
                                state.update(|s| s.set_criterion("search", Criterion::Contains(text)));
                            })
                            placeholder="Search name or email..."
                        />
                        <select
                            class="filter-select"
                            prop:value=move || state.with(|s| equals_value(s, "role"))
                            on:change=move |ev| {
                                state.update(|s| s.set_criterion("role", Criterion::Equals(event_target_value(&ev))));
                            }
                        >
                            <option value="">"All roles"</option>
                            {contracts::domain::users::UserRole::ALL.iter().map(|role| view! {
                                <option value={role.as_str()}>{role.label()}</option>
                            }).collect_view()}
                        </select>
                        <select
                            class="filter-select"
                            prop:value=move || state.with(|s| equals_value(s, "status"))
                            on:change=move |ev| {
                                state.update(|s| s.set_criterion("status", Criterion::Equals(event_target_value(&ev))));
                            }
                        >
                            <option value="">"All statuses"</option>
                            {contracts::domain::users::UserStatus::ALL.iter().map(|status| view! {
                                <option value={status.as_str()}>{status.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                }.into_any()
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <SortableHeader label="Name" field="first_name"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Email" field="email"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Role" field="role"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Status" field="status"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="2FA" field="two_factor_enabled"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Created" field="created_at"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Last login" field="last_login_at"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|user| {
                            let edit_user = user.clone();
                            let delete_user = user.clone();
                            let status_class = format!("status-pill status-pill--{}", user.status.as_str());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{user.full_name()}</td>
                                    <td class="table__cell">{user.email.clone()}</td>
                                    <td class="table__cell">{user.role.label()}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{user.status.label()}</span>
                                    </td>
                                    <td class="table__cell">{if user.two_factor_enabled { "On" } else { "Off" }}</td>
                                    <td class="table__cell">{format_datetime(&user.created_at)}</td>
                                    <td class="table__cell">{format_datetime_opt(&user.last_login_at)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="icon-button"
                                            title="Edit"
                                            on:click=move |_| open_details(Some(edit_user.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="icon-button icon-button--danger"
                                            title="Delete"
                                            on:click=move |_| confirm_delete(delete_user.clone())
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                {move || state.with(|s| s.is_loading()).then(|| view! {
                    <div class="table__loading">"Loading..."</div>
                })}
            </div>
        </div>
    }
}
