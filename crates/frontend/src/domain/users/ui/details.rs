use contracts::domain::users::{CreateUserDto, UpdateUserDto, UserRecord, UserRole, UserStatus};
use leptos::prelude::*;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

use crate::domain::users::api;
use crate::shared::forms::{self, ErrorMap, FieldRule, FormValues, RuleSet, SUBMIT_KEY};

fn rules(is_edit: bool) -> RuleSet {
    let mut fields = vec![
        ("first_name", vec![FieldRule::Required]),
        ("last_name", vec![FieldRule::Required]),
        ("email", vec![FieldRule::Required, FieldRule::EmailShape]),
    ];
    if !is_edit {
        // Password is only set at creation time.
        fields.push((
            "password",
            vec![FieldRule::Required, FieldRule::MinLength(6)],
        ));
    }
    RuleSet::new(fields)
}

fn initial_values(user: &Option<UserRecord>) -> FormValues {
    let mut values = FormValues::new();
    if let Some(user) = user {
        values.insert("first_name".to_string(), user.first_name.clone());
        values.insert("last_name".to_string(), user.last_name.clone());
        values.insert("email".to_string(), user.email.clone());
        values.insert("role".to_string(), user.role.as_str().to_string());
        values.insert("status".to_string(), user.status.as_str().to_string());
    } else {
        values.insert("role".to_string(), UserRole::Agent.as_str().to_string());
        values.insert("status".to_string(), UserStatus::Active.as_str().to_string());
    }
    values
}

fn value_of(values: &FormValues, field: &str) -> String {
    values.get(field).cloned().unwrap_or_default()
}

/// Create/edit dialog for a console user. Owns its form state; the
/// state is dropped with the dialog on close or successful save.
#[component]
pub fn UserDetails(
    user: Option<UserRecord>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let is_edit = user.is_some();
    let user_id = user.as_ref().map(|u| u.id.clone());
    let values = RwSignal::new(initial_values(&user));
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
            let found = forms::validate(&current, &rules(is_edit));
            if !found.is_empty() {
                // Invalid form: no network call is issued.
                errors.set(found);
                return;
            }
            errors.set(ErrorMap::new());
            set_saving.set(true);

            let user_id = user_id.clone();
            let on_saved = on_saved.clone();
            spawn_local(async move {
                let result = match user_id {
                    Some(id) => {
                        let dto = UpdateUserDto {
                            first_name: value_of(&current, "first_name"),
                            last_name: value_of(&current, "last_name"),
                            email: value_of(&current, "email"),
                            role: value_of(&current, "role"),
                            status: value_of(&current, "status"),
                        };
                        api::update_user(&id, &dto).await.map(|_| ())
                    }
                    None => {
                        let dto = CreateUserDto {
                            first_name: value_of(&current, "first_name"),
                            last_name: value_of(&current, "last_name"),
                            email: value_of(&current, "email"),
                            password: value_of(&current, "password"),
                            role: value_of(&current, "role"),
                        };
                        api::create_user(&dto).await.map(|_| ())
                    }
                };
                set_saving.set(false);
                match result {
                    Ok(()) => on_saved(()),
                    // Duplicate email and friends land next to the
                    // field errors under the reserved key.
                    Err(e) => errors.update(|m| forms::merge_submit_error(m, e.message())),
                }
            });
        }
    };

    view! {
        <div class="details-container user-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit User" } else { "New User" }}</h3>
            </div>

            {move || errors.with(|e| e.get(SUBMIT_KEY).cloned()).map(|message| view! {
                <div class="error-banner">
                    <span class="error-banner__icon">"⚠"</span>
                    <span class="error-banner__text">{message}</span>
                </div>
            })}

            <div class="details-form">
                <div class="form-group">
                    <label for="first_name">"First name"</label>
                    <input
                        type="text"
                        id="first_name"
                        prop:value=field_value("first_name")
                        on:input=set_field("first_name")
                        placeholder="Enter first name"
                    />
                    {field_error("first_name")}
                </div>

                <div class="form-group">
                    <label for="last_name">"Last name"</label>
                    <input
                        type="text"
                        id="last_name"
                        prop:value=field_value("last_name")
                        on:input=set_field("last_name")
                        placeholder="Enter last name"
                    />
                    {field_error("last_name")}
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=field_value("email")
                        on:input=set_field("email")
                        placeholder="name@company.co.ke"
                    />
                    {field_error("email")}
                </div>

                {(!is_edit).then(|| view! {
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=field_value("password")
                            on:input=set_field("password")
                            placeholder="At least 6 characters"
                        />
                        {field_error("password")}
                    </div>
                })}

                <div class="form-group">
                    <label for="role">"Role"</label>
                    <select
                        id="role"
                        prop:value=field_value("role")
                        on:change=set_field("role")
                    >
                        {UserRole::ALL.iter().map(|role| view! {
                            <option value={role.as_str()}>{role.label()}</option>
                        }).collect_view()}
                    </select>
                </div>

                {is_edit.then(|| view! {
                    <div class="form-group">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            prop:value=field_value("status")
                            on:change=set_field("status")
                        >
                            {UserStatus::ALL.iter().map(|status| view! {
                                <option value={status.as_str()}>{status.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                })}
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
