//! Problem statement submission form.
//!
//! All field values live in one `RwSignal<ProblemForm>`. The custom
//! category input is not separate state: it is shown whenever the
//! current form says so ([`ProblemForm::shows_custom_category`]).
//! Submission goes through [`SubmissionWorkflow`], whose latch also
//! drives the disabled state of the submit button.

use std::rc::Rc;

use leptos::*;
use leptos_router::A;
use portal_core::{
    Affiliation, Category, Field, FieldErrors, ProblemForm, SubmissionWorkflow,
};

use crate::components::use_toaster;
use crate::services::SupabaseStore;
use crate::supabase_config;

#[component]
pub fn ProblemSubmissionForm() -> impl IntoView {
    let toaster = use_toaster();

    let form = create_rw_signal(ProblemForm::default());
    let errors = create_rw_signal(FieldErrors::default());
    let (is_submitting, set_is_submitting) = create_signal(false);

    let workflow = Rc::new(
        SubmissionWorkflow::new(SupabaseStore::new(supabase_config()))
            .on_submitting_change(move |busy| set_is_submitting.set(busy)),
    );

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let workflow = Rc::clone(&workflow);
        spawn_local(async move {
            // Work on a snapshot; it only replaces the live form once
            // the insert succeeded, so a failure keeps what was typed.
            let mut snapshot = form.get_untracked();
            let outcome = workflow.submit(&mut snapshot).await;

            if let Some(inline) = outcome.inline_errors() {
                errors.set(inline);
            }

            if outcome.is_submitted() {
                form.set(snapshot);
            }

            if let Some(notification) = outcome.notification() {
                toaster.toast(notification);
            }
        });
    };

    let affiliations: Vec<&'static str> = Affiliation::ALL.iter().map(|a| a.label()).collect();
    let categories: Vec<&'static str> = Category::ALL.iter().map(|c| c.label()).collect();

    view! {
        <div class="submit-page">
            <div class="container">
                <A href="/" class="back-link">"← Back to Home"</A>

                <div class="form-wrapper">
                    <div class="form-header">
                        <h1>"Submit Your Problem"</h1>
                        <p class="subtitle">"Share your AI challenge with our expert community"</p>
                    </div>

                    <div class="form-card">
                        <form class="problem-form" on:submit=on_submit novalidate=true>
                            <div class="form-grid">
                                <TextInput
                                    field=Field::Name
                                    form=form
                                    errors=errors
                                    placeholder="Your name or team name"
                                />
                                <SelectInput
                                    field=Field::Affiliation
                                    options=affiliations
                                    form=form
                                    errors=errors
                                    placeholder="Select your affiliation"
                                />
                            </div>

                            <TextInput
                                field=Field::ContactEmail
                                form=form
                                errors=errors
                                input_type="email"
                                placeholder="your.email@example.com"
                            />

                            <TextInput
                                field=Field::ProblemTitle
                                form=form
                                errors=errors
                                placeholder="A concise title for your problem statement"
                            />

                            <TextArea
                                field=Field::ProblemDescription
                                form=form
                                errors=errors
                                rows=6
                                placeholder="Describe your problem in detail. Include the current situation, challenges you're facing, and what you hope to achieve."
                            />

                            <SelectInput
                                field=Field::Category
                                options=categories
                                form=form
                                errors=errors
                                placeholder="Select problem category"
                            />

                            // Only part of the form while "Other" is selected
                            <Show
                                when=move || form.with(|f| f.shows_custom_category())
                                fallback=|| view! { }
                            >
                                <TextInput
                                    field=Field::CustomCategory
                                    form=form
                                    errors=errors
                                    placeholder="Enter a custom category"
                                />
                            </Show>

                            <TextArea
                                field=Field::AdditionalFilesLinks
                                form=form
                                errors=errors
                                rows=3
                                placeholder="Share any relevant documents, datasets, or links that provide more context (URLs, Google Drive links, etc.)"
                            />

                            <div class="privacy-notice">
                                <p>
                                    <strong>"Privacy Notice: "</strong>
                                    "Your information will only be used for club communications and project review. "
                                    "We respect your privacy and will not share your details with third parties without your consent."
                                </p>
                            </div>

                            <button
                                type="submit"
                                class="submit-button"
                                disabled=move || is_submitting.get()
                            >
                                {move || if is_submitting.get() {
                                    "Submitting..."
                                } else {
                                    "➤ Submit Problem Statement"
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn label_text(field: Field) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

/// Write an edited value and clear that field's message.
fn edit(form: RwSignal<ProblemForm>, errors: RwSignal<FieldErrors>, field: Field, value: String) {
    form.update(|f| f.set(field, value));
    if errors.with_untracked(|e| e.contains(field)) {
        errors.update(|e| e.remove(field));
    }
}

/// Inline message under a field, when it failed validation.
#[component]
fn FieldMessage(field: Field, errors: RwSignal<FieldErrors>) -> impl IntoView {
    view! {
        <Show
            when=move || errors.with(|e| e.contains(field))
            fallback=|| view! { }
        >
            <p class="form-message">
                {move || errors.with(|e| e.get(field).unwrap_or_default().to_string())}
            </p>
        </Show>
    }
}

#[component]
fn TextInput(
    field: Field,
    form: RwSignal<ProblemForm>,
    errors: RwSignal<FieldErrors>,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-item" class:invalid=move || errors.with(|e| e.contains(field))>
            <label class="form-label" for=field.key()>{label_text(field)}</label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                class="form-input"
                placeholder=placeholder
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| edit(form, errors, field, event_target_value(&ev))
            />
            <FieldMessage field=field errors=errors/>
        </div>
    }
}

#[component]
fn TextArea(
    field: Field,
    form: RwSignal<ProblemForm>,
    errors: RwSignal<FieldErrors>,
    placeholder: &'static str,
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-item" class:invalid=move || errors.with(|e| e.contains(field))>
            <label class="form-label" for=field.key()>{label_text(field)}</label>
            <textarea
                id=field.key()
                name=field.key()
                class="form-textarea"
                rows=rows
                placeholder=placeholder
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| edit(form, errors, field, event_target_value(&ev))
            ></textarea>
            <FieldMessage field=field errors=errors/>
        </div>
    }
}

#[component]
fn SelectInput(
    field: Field,
    options: Vec<&'static str>,
    form: RwSignal<ProblemForm>,
    errors: RwSignal<FieldErrors>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-item" class:invalid=move || errors.with(|e| e.contains(field))>
            <label class="form-label" for=field.key()>{label_text(field)}</label>
            <select
                id=field.key()
                name=field.key()
                class="form-select"
                on:change=move |ev| edit(form, errors, field, event_target_value(&ev))
            >
                <option
                    value=""
                    disabled=true
                    prop:selected=move || form.with(|f| f.get(field).is_empty())
                >
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|option| view! {
                        <option
                            value=option
                            prop:selected=move || form.with(|f| f.get(field) == option)
                        >
                            {option}
                        </option>
                    })
                    .collect_view()}
            </select>
            <FieldMessage field=field errors=errors/>
        </div>
    }
}
