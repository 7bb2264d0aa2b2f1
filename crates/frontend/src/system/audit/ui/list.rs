use chrono::NaiveDate;
use contracts::system::audit::{AuditAction, AuditLogRecord};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::date_input::DateInput;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::date_utils::format_datetime;
use crate::shared::filter::Criterion;
use crate::shared::icons::icon;
use crate::shared::list_state::{FetchMode, ListState};

fn date_bounds(state: &ListState<AuditLogRecord>) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match state.criteria.get("timestamp") {
        Some(Criterion::DateRange { from, to }) => (*from, *to),
        _ => (None, None),
    }
}

/// Audit trail screen. Read-only and server-paginated: every filter or
/// page change goes back to the backend.
#[component]
pub fn AuditLogsPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<AuditLogRecord>::new(
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
            let result = crate::system::audit::api::fetch_audit_logs(&query).await;
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
    let action_value = Signal::derive(move || {
        state.with(|s| match s.criteria.get("action") {
            Some(Criterion::Equals(v)) => v.clone(),
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

    let remove_filter = move |field: String| {
        state.update(|s| {
            s.criteria.clear(&field);
            s.page.index = 0;
        });
        load();
    };

    // Chips for the active criteria, with date bounds labeled per side.
    let active_tags = move || {
        state.with(|s| {
            let mut tags: Vec<(String, String)> = Vec::new();
            if let Some(Criterion::Contains(v)) = s.criteria.get("search") {
                tags.push(("search".to_string(), format!("Search: {}", v)));
            }
            if let Some(Criterion::Equals(v)) = s.criteria.get("action") {
                tags.push(("action".to_string(), format!("Action: {}", v)));
            }
            let (from, to) = date_bounds(s);
            if from.is_some() || to.is_some() {
                let label = match (from, to) {
                    (Some(from), Some(to)) => format!("{} to {}", from, to),
                    (Some(from), None) => format!("From {}", from),
                    (None, Some(to)) => format!("Until {}", to),
                    (None, None) => unreachable!(),
                };
                tags.push(("timestamp".to_string(), label));
            }
            tags
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Audit Logs"</h1>
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
                            placeholder="Search actor, resource or details..."
                        />
                        <select
                            class="filter-select"
                            prop:value=action_value
                            on:change=move |ev| {
                                state.update(|s| s.set_criterion("action", Criterion::Equals(event_target_value(&ev))));
                                load();
                            }
                        >
                            <option value="">"All actions"</option>
                            {AuditAction::ALL.iter().map(|action| view! {
                                <option value={action.as_str()}>{action.label()}</option>
                            }).collect_view()}
                        </select>
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
                    <div class="filter-tags">
                        {move || active_tags().into_iter().map(|(field, label)| view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new({
                                    let field = field.clone();
                                    move |_| remove_filter(field.clone())
                                })
                            />
                        }).collect_view()}
                        {move || state.with(|s| s.criteria.active_count() > 1).then(|| view! {
                            <button
                                class="button button--link"
                                on:click=move |_| {
                                    state.update(|s| s.clear_criteria());
                                    load();
                                }
                            >
                                "Clear all"
                            </button>
                        })}
                    </div>
                }.into_any()
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Timestamp"</th>
                            <th class="table__header-cell">"Actor"</th>
                            <th class="table__header-cell">"Action"</th>
                            <th class="table__header-cell">"Resource"</th>
                            <th class="table__header-cell">"Details"</th>
                            <th class="table__header-cell">"IP address"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|log| {
                            let action_class = format!("action-pill action-pill--{}", log.action.as_str());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{format_datetime(&log.timestamp)}</td>
                                    <td class="table__cell">{log.actor_email.clone()}</td>
                                    <td class="table__cell">
                                        <span class=action_class>{log.action.label()}</span>
                                    </td>
                                    <td class="table__cell">{log.resource.clone()}</td>
                                    <td class="table__cell">{log.details.clone()}</td>
                                    <td class="table__cell">{log.ip_address.clone()}</td>
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
