use contracts::domain::plans::{PlanRecord, PlanStatus, PlanType};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::plans::api;
use crate::domain::plans::ui::details::PlanDetails;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::error_banner::ErrorBanner;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::sortable_header::SortableHeader;
use crate::shared::filter::Criterion;
use crate::shared::icons::icon;
use crate::shared::list_state::{FetchMode, ListState};
use crate::shared::modal::ModalService;

/// Insurance plans screen. Premium and cover columns sort by their
/// numeric amount despite arriving as "KES 50,000" strings.
#[component]
pub fn PlansListPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<PlanRecord>::new(FetchMode::ClientPaged, "name"));
    let modal = use_context::<ModalService>().expect("ModalService not found in context");
    let is_filter_expanded = RwSignal::new(true);

    let load = move || {
        let token = state.write().begin_fetch();
        spawn_local(async move {
            let result = api::fetch_plans().await;
            state.update(|s| {
                s.apply_source(token, result);
            });
        });
    };

    let open_details = move |plan: Option<PlanRecord>| {
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
                <PlanDetails plan=plan.clone() on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    let confirm_delete = move |plan: PlanRecord| {
        let message = format!("Delete plan \"{}\"?", plan.name);
        modal.open(move |handle| {
            let id = plan.id.clone();
            let on_confirm = Rc::new({
                let handle = handle.clone();
                move |_| {
                    let handle = handle.clone();
                    let id = id.clone();
                    spawn_local(async move {
                        match api::delete_plan(&id).await {
                            Ok(()) => {
                                handle.close();
                                load();
                            }
                            Err(e) => {
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
                    title="Delete plan"
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
    let equals_value = move |field: &'static str| {
        Signal::derive(move || {
            state.with(|s| match s.criteria.get(field) {
                Some(Criterion::Equals(v)) => v.clone(),
                _ => String::new(),
            })
        })
    };
    let type_value = equals_value("plan_type");
    let status_value = equals_value("status");
    let sort_field = Signal::derive(move || state.with(|s| s.sort.field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort.is_ascending()));
    let on_sort = Callback::new(move |field: String| {
        state.update(|s| s.toggle_sort(&field));
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Insurance Plans"</h1>
                    <span class="badge">{move || state.with(|s| s.page.total_count.to_string())}</span>
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| open_details(None)>
                        {icon("plus")}
                        " New Plan"
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
                            placeholder="Search plan or company..."
                        />
                        <select
                            class="filter-select"
                            prop:value=type_value
                            on:change=move |ev| {
                                state.update(|s| s.set_criterion("plan_type", Criterion::Equals(event_target_value(&ev))));
                            }
                        >
                            <option value="">"All types"</option>
                            {PlanType::ALL.iter().map(|plan_type| view! {
                                <option value={plan_type.as_str()}>{plan_type.label()}</option>
                            }).collect_view()}
                        </select>
                        <select
                            class="filter-select"
                            prop:value=status_value
                            on:change=move |ev| {
                                state.update(|s| s.set_criterion("status", Criterion::Equals(event_target_value(&ev))));
                            }
                        >
                            <option value="">"All statuses"</option>
                            {PlanStatus::ALL.iter().map(|status| view! {
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
                            <SortableHeader label="Plan" field="name"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Company" field="company_name"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Type" field="plan_type"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Premium" field="premium"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <SortableHeader label="Cover" field="cover_amount"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <th class="table__header-cell">"Ages"</th>
                            <SortableHeader label="Status" field="status"
                                current_field=sort_field ascending=sort_ascending on_sort=on_sort />
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.clone()).into_iter().map(|plan| {
                            let edit_plan = plan.clone();
                            let delete_plan = plan.clone();
                            let status_class = format!("status-pill status-pill--{}", plan.status.as_str());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{plan.name.clone()}</td>
                                    <td class="table__cell">{plan.company_name.clone()}</td>
                                    <td class="table__cell">{plan.plan_type.label()}</td>
                                    <td class="table__cell table__cell--number">{plan.premium.clone()}</td>
                                    <td class="table__cell table__cell--number">{plan.cover_amount.clone()}</td>
                                    <td class="table__cell">{format!("{} - {}", plan.min_age, plan.max_age)}</td>
                                    <td class="table__cell">
                                        <span class=status_class>{plan.status.label()}</span>
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="icon-button"
                                            title="Edit"
                                            on:click=move |_| open_details(Some(edit_plan.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="icon-button icon-button--danger"
                                            title="Delete"
                                            on:click=move |_| confirm_delete(delete_plan.clone())
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
