use contracts::domain::companies::{CompanyDto, CompanyRecord, CompanyStatus};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::companies::api;
use crate::shared::forms::{self, ErrorMap, FieldRule, FormValues, RuleSet, SUBMIT_KEY};

fn rules() -> RuleSet {
    RuleSet::new(vec![
        ("name", vec![FieldRule::Required]),
        ("code", vec![FieldRule::Required]),
        (
            "contact_email",
            vec![FieldRule::Required, FieldRule::EmailShape],
        ),
        ("phone", vec![FieldRule::Required]),
    ])
}

fn initial_values(company: &Option<CompanyRecord>) -> FormValues {
    let mut values = FormValues::new();
    if let Some(company) = company {
        values.insert("name".to_string(), company.name.clone());
        values.insert("code".to_string(), company.code.clone());
        values.insert("contact_email".to_string(), company.contact_email.clone());
        values.insert("phone".to_string(), company.phone.clone());
        values.insert("status".to_string(), company.status.as_str().to_string());
    } else {
        values.insert(
            "status".to_string(),
            CompanyStatus::Active.as_str().to_string(),
        );
    }
    values
}

fn value_of(values: &FormValues, field: &str) -> String {
    values.get(field).cloned().unwrap_or_default()
}

#[component]
pub fn CompanyDetails(
    company: Option<CompanyRecord>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let is_edit = company.is_some();
    let company_id = company.as_ref().map(|c| c.id.clone());
    let values = RwSignal::new(initial_values(&company));
    let errors = RwSignal::new(ErrorMap::new());
    let (saving, set_saving) = signal(false);

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

            let dto = CompanyDto {
                name: value_of(&current, "name"),
                code: value_of(&current, "code"),
                contact_email: value_of(&current, "contact_email"),
                phone: value_of(&current, "phone"),
                status: value_of(&current, "status"),
            };
            let company_id = company_id.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match company_id {
                    Some(id) => api::update_company(&id, &dto).await.map(|_| ()),
                    None => api::create_company(&dto).await.map(|_| ()),
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
        <div class="details-container company-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit Company" } else { "New Company" }}</h3>
            </div>

            {move || errors.with(|e| e.get(SUBMIT_KEY).cloned()).map(|message| view! {
                <div class="error-banner">
                    <span class="error-banner__icon">"⚠"</span>
                    <span class="error-banner__text">{message}</span>
                </div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Company name"</label>
                    <input
                        type="text"
                        id="name"
                        prop:value=field_value("name")
                        on:input=set_field("name")
                        placeholder="Enter company name"
                    />
                    {field_error("name")}
                </div>

                <div class="form-group">
                    <label for="code">"Registry code"</label>
                    <input
                        type="text"
                        id="code"
                        prop:value=field_value("code")
                        on:input=set_field("code")
                        placeholder="e.g. JUB"
                    />
                    {field_error("code")}
                </div>

                <div class="form-group">
                    <label for="contact_email">"Contact email"</label>
                    <input
                        type="email"
                        id="contact_email"
                        prop:value=field_value("contact_email")
                        on:input=set_field("contact_email")
                        placeholder="contact@company.co.ke"
                    />
                    {field_error("contact_email")}
                </div>

                <div class="form-group">
                    <label for="phone">"Phone"</label>
                    <input
                        type="tel"
                        id="phone"
                        prop:value=field_value("phone")
                        on:input=set_field("phone")
                        placeholder="+254 700 000000"
                    />
                    {field_error("phone")}
                </div>

                <div class="form-group">
                    <label for="status">"Status"</label>
                    <select
                        id="status"
                        prop:value=field_value("status")
                        on:change=set_field("status")
                    >
                        {CompanyStatus::ALL.iter().map(|status| view! {
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
