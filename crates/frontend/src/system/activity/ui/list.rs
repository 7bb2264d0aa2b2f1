use chrono::NaiveDate;
use contracts::system::activity::UserActivityRecord;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_datetime;
use crate::shared::filter::Criterion;
use crate::shared::icons::icon;
use crate::shared::list_state::{FetchMode, ListState};

fn date_bounds(state: &ListState<UserActivityRecord>) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match state.criteria.get("timestamp") {
        Some(Criterion::DateRange { from, to }) => (*from, *to),
        _ => (None, None),
    }
}

/// Security analytics feed of user activity, server-paginated.
#[component]
pub fn UserActivitiesPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<UserActivityRecord>::new(
        FetchMode::ServerPaged,
        "timestamp",
    ));
    let is_filter_expanded = RwSignal::new(true);

    let load = move || {
        let (token, query) = {
            let mut s = state.write();
            let token = s.begin_fetch();
            (token, s.query())
        };
        spawn_local(async move {
            let result = crate::system::activity::api::fetch_activities(&query).await;
            state.update(|s| {
                s.apply_page(token, result);
            });
        });
    };

    load();

    let search_value = Signal::derive(move || {
        state.with(|s| match s.criteria.get("search") {
            Some(Criterion::Contains(v)) => v.clone(),
            _ => String::new(),
        })
    });
    let date_from = Signal::derive(move || {
        state.with(|s| {
            date_bounds(s)
                .0
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
    });
    let date_to = Signal::derive(move || {
        state.with(|s| {
            date_bounds(s)
                .1
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
    });

    let set_date_bound = move |is_from: bool, raw: String| {
        let parsed = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
        state.update(|s| {
            let (from, to) = date_bounds(s);
            let range = if is_from {
                Criterion::DateRange { from: parsed, to }
            } else {
                Criterion::DateRange { from, to: parsed }
            };
            s.set_criterion("timestamp", range);
        });
        load();
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"User Activity"</h1>
                    <span class="badge">{move || state.with(|s| s.page.total_count.to_string())}</span>
                </div>
                <div class="page__header-right">
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
                        on_page_change=Callback::new(move |page| {
                            state.update(|s| s.go_to_page(page));
                            load();
                        })
                        on_page_size_change=Callback::new(move |size| {
                            state.update(|s| s.set_page_size(size));
                            load();
                        })
                    />
                }.into_any()
                filter_content=move || view! {
                    <div class="filter-row">
                        <SearchInput
                            value=search_value
                            on_change=Callback::new(move |text: String| {
                                state.update(|s| s.set_criterion("search", Criterion::Contains(text)));
                                load();
                            })
                            placeholder="Search user or activity..."
                        />
                        <DateInput
                            value=date_from
                            on_change=Callback::new(move |raw| set_date_bound(true, raw))
                            label="From"
                        />
                        <DateInput
                            value=date_to
                            on_change=Callback::new(move |raw| set_date_bound(false, raw))
                            label="To"
                        />
                    </div>
                }.into_any()
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Timestamp"</th>
                            <th class="table__header-cell">"User"</th>
                            <th class="table__header-cell">"Activity"</th>
                            <th class="table__header-cell">"IP address"</th>
                            <th class="table__header-cell">"User agent"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|entry| view! {
                            <tr class="table__row">
                                <td class="table__cell">{format_datetime(&entry.timestamp)}</td>
                                <td class="table__cell">{entry.user_email.clone()}</td>
                                <td class="table__cell">{entry.activity.clone()}</td>
                                <td class="table__cell">{entry.ip_address.clone()}</td>
                                <td class="table__cell table__cell--muted">
                                    {entry.user_agent.clone().unwrap_or_else(|| "-".to_string())}
                                </td>
                            </tr>
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
