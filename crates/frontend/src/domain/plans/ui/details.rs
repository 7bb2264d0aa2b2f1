use contracts::domain::companies::CompanyRecord;
use contracts::domain::plans::{PlanDto, PlanRecord, PlanStatus, PlanType};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::companies::api as companies_api;
use crate::domain::plans::api;
use crate::shared::forms::{self, CrossField, ErrorMap, FieldRule, FormValues, RuleSet, SUBMIT_KEY};

fn max_age_exceeds_min(values: &FormValues) -> bool {
    let min = values
        .get("min_age")
        .and_then(|v| v.trim().parse::<f64>().ok());
    let max = values
        .get("max_age")
        .and_then(|v| v.trim().parse::<f64>().ok());
    match (min, max) {
        (Some(min), Some(max)) => max > min,
        // Missing or malformed values are caught by the field rules.
        _ => true,
    }
}

fn rules() -> RuleSet {
    RuleSet::new(vec![
        ("company_id", vec![FieldRule::Required]),
        ("name", vec![FieldRule::Required]),
        ("premium", vec![FieldRule::Required]),
        ("cover_amount", vec![FieldRule::Required]),
        (
            "min_age",
            vec![
                FieldRule::Required,
                FieldRule::NumericRange { min: 0.0, max: 120.0 },
            ],
        ),
        (
            "max_age",
            vec![
                FieldRule::Required,
                FieldRule::NumericRange { min: 0.0, max: 120.0 },
            ],
        ),
    ])
    .with_cross(vec![CrossField {
        field: "max_age",
        message: "Maximum age must exceed minimum age",
        check: max_age_exceeds_min,
    }])
}

fn initial_values(plan: &Option<PlanRecord>) -> FormValues {
    let mut values = FormValues::new();
    if let Some(plan) = plan {
        values.insert("company_id".to_string(), plan.company_id.clone());
        values.insert("name".to_string(), plan.name.clone());
        values.insert("plan_type".to_string(), plan.plan_type.as_str().to_string());
        values.insert("premium".to_string(), plan.premium.clone());
        values.insert("cover_amount".to_string(), plan.cover_amount.clone());
        values.insert("min_age".to_string(), plan.min_age.to_string());
        values.insert("max_age".to_string(), plan.max_age.to_string());
        values.insert("status".to_string(), plan.status.as_str().to_string());
    } else {
        values.insert(
            "plan_type".to_string(),
            PlanType::Medical.as_str().to_string(),
        );
        values.insert("status".to_string(), PlanStatus::Active.as_str().to_string());
    }
    values
}

fn value_of(values: &FormValues, field: &str) -> String {
    values.get(field).cloned().unwrap_or_default()
}

#[component]
pub fn PlanDetails(
    plan: Option<PlanRecord>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let is_edit = plan.is_some();
    let plan_id = plan.as_ref().map(|p| p.id.clone());
    let values = RwSignal::new(initial_values(&plan));
    let errors = RwSignal::new(ErrorMap::new());
    let (saving, set_saving) = signal(false);

    // Company choices load once when the dialog opens.
    let companies = RwSignal::new(Vec::<CompanyRecord>::new());
    spawn_local(async move {
        if let Ok(list) = companies_api::fetch_companies().await {
            companies.set(list);
        }
    });

    let field_value = move |field: &'static str| move || values.with(|v| value_of(v, field));
    let set_field = move |field: &'static str| {
        move |ev: leptos::ev::Event| {
            values.update(|v| {
                v.insert(field.to_string(), event_target_value(&ev));
            });
        }
    };
    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| e.get(field).cloned()).map(|message| {
                view! { <span class="form-group__error">{message}</span> }
            })
        }
    };

    let submit = {
        let on_saved = on_saved.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            let current = values.get_untracked();
            let found = forms::validate(&current, &rules());
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(ErrorMap::new());
            set_saving.set(true);

            let dto = PlanDto {
                company_id: value_of(&current, "company_id"),
                name: value_of(&current, "name"),
                plan_type: value_of(&current, "plan_type"),
                premium: value_of(&current, "premium"),
                cover_amount: value_of(&current, "cover_amount"),
                // Validation already proved these parse.
                min_age: value_of(&current, "min_age").trim().parse().unwrap_or(0),
                max_age: value_of(&current, "max_age").trim().parse().unwrap_or(0),
                status: value_of(&current, "status"),
            };
            let plan_id = plan_id.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match plan_id {
                    Some(id) => api::update_plan(&id, &dto).await.map(|_| ()),
                    None => api::create_plan(&dto).await.map(|_| ()),
                };
                set_saving.set(false);
                match result {
                    Ok(()) => on_saved(()),
                    Err(e) => errors.update(|m| forms::merge_submit_error(m, e.message())),
                }
            });
        }
    };

    view! {
        <div class="details-container plan-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Plan" } else { "New Plan" }}</h3>
            </div>

            {move || errors.with(|e| e.get(SUBMIT_KEY).cloned()).map(|message| view! {
                <div class="error-banner">
                    <span class="error-banner__icon">"⚠"</span>
                    <span class="error-banner__text">{message}</span>
                </div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="company_id">"Company"</label>
                    <select
                        id="company_id"
                        prop:value=field_value("company_id")
                        on:change=set_field("company_id")
                    >
                        <option value="">"Select a company"</option>
                        {move || companies.get().into_iter().map(|company| view! {
                            <option value={company.id.clone()}>{company.name.clone()}</option>
                        }).collect_view()}
                    </select>
                    {field_error("company_id")}
                </div>

                <div class="form-group">
                    <label for="name">"Plan name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=field_value("name")
                        on:input=set_field("name")
                        placeholder="Enter plan name"
                    />
                    {field_error("name")}
                </div>

                <div class="form-group">
                    <label for="plan_type">"Plan type"</label>
                    <select
                        id="plan_type"
                        prop:value=field_value("plan_type")
                        on:change=set_field("plan_type")
                    >
                        {PlanType::ALL.iter().map(|plan_type| view! {
                            <option value={plan_type.as_str()}>{plan_type.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="premium">"Premium"</label>
                    <input
                        type="text"
                        id="premium"
                        prop:value=field_value("premium")
                        on:input=set_field("premium")
                        placeholder="e.g. KES 12,500"
                    />
                    {field_error("premium")}
                </div>

                <div class="form-group">
                    <label for="cover_amount">"Cover amount"</label>
                    <input
                        type="text"
                        id="cover_amount"
                        prop:value=field_value("cover_amount")
                        on:input=set_field("cover_amount")
                        placeholder="e.g. KES 1,000,000"
                    />
                    {field_error("cover_amount")}
                </div>

                <div class="form-group form-group--half">
                    <label for="min_age">"Minimum age"</label>
                    <input
                        type="number"
                        id="min_age"
                        prop:value=field_value("min_age")
                        on:input=set_field("min_age")
                    />
                    {field_error("min_age")}
                </div>

                <div class="form-group form-group--half">
                    <label for="max_age">"Maximum age"</label>
                    <input
                        type="number"
                        id="max_age"
                        prop:value=field_value("max_age")
                        on:input=set_field("max_age")
                    />
                    {field_error("max_age")}
                </div>

                <div class="form-group">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        prop:value=field_value("status")
                        on:change=set_field("status")
                    >
                        {PlanStatus::ALL.iter().map(|status| view! {
                            <option value={status.as_str()}>{status.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel(())
                >
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=submit
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
