//! Contact Section Component
//!
//! The contact form with country-aware phone validation and submission
//! into the local store. Validation failures render inline under their
//! fields; the submission outcome surfaces in the status modal, and the
//! form only resets after a successful save.

use dioxus::prelude::*;
use folio_core::contact::{ContactRecord, Field, FieldError, COUNTRIES};

use crate::components::nav_header::Section;
use crate::components::StatusModal;
use crate::content;
use crate::context::{use_nav_bridge, use_store, use_store_ready};

const SUBMIT_OK: &str = "Thank you! Your request has been submitted.";
const SUBMIT_FAILED: &str = "There was an error submitting your request. Please try again.";

#[component]
pub fn ContactSection() -> Element {
    let bridge = use_nav_bridge();
    let store = use_store();
    let store_ready = use_store_ready();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut dial_code = use_signal(|| COUNTRIES[0].dial_code.to_string());
    let mut phone = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut errors: Signal<Vec<FieldError>> = use_signal(Vec::new);
    let mut submitting = use_signal(|| false);
    let mut status: Signal<Option<(bool, String)>> = use_signal(|| None);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let record = ContactRecord {
            name: name(),
            email: email(),
            dial_code: dial_code(),
            phone: phone(),
            message: message(),
        };

        let found = record.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        submitting.set(true);

        spawn(async move {
            let shared = store();
            let guard = shared.read().await;
            match guard.as_ref().map(|s| s.save_submission(&record)) {
                Some(Ok(id)) => {
                    tracing::info!(submission = %id, "contact form submitted");
                    status.set(Some((true, SUBMIT_OK.to_string())));
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
                Some(Err(e)) => {
                    tracing::error!(error = %e, "failed to store contact submission");
                    status.set(Some((false, SUBMIT_FAILED.to_string())));
                }
                None => {
                    tracing::warn!("submission store not ready yet");
                    status.set(Some((false, SUBMIT_FAILED.to_string())));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        section {
            id: "contact",
            class: "page-section contact-section",
            onmounted: move |evt| bridge.register_section(Section::Contact, evt.data()),

            div { class: "section-inner",
                h2 { class: "section-title", "Contact" }
                p { class: "contact-lead",
                    "Have a project in mind? Drop me a line at "
                    a { href: "mailto:{content::OWNER_EMAIL}", "{content::OWNER_EMAIL}" }
                    " or use the form below."
                }

                form { class: "contact-form", onsubmit: on_submit,
                    div { class: "form-row",
                        div { class: "form-field",
                            label { r#for: "contact-name", "Name" }
                            input {
                                id: "contact-name",
                                name: "name",
                                placeholder: "Your name",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                            }
                            FieldMessage { errors, field: Field::Name }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-email", "Email" }
                            input {
                                id: "contact-email",
                                name: "email",
                                placeholder: "you@example.com",
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                            FieldMessage { errors, field: Field::Email }
                        }
                    }

                    div { class: "form-row",
                        div { class: "form-field dial-field",
                            label { r#for: "contact-country", "Country" }
                            select {
                                id: "contact-country",
                                name: "country",
                                value: "{dial_code}",
                                onchange: move |evt| dial_code.set(evt.value()),
                                for country in COUNTRIES {
                                    option {
                                        value: "{country.dial_code}",
                                        selected: country.dial_code == dial_code(),
                                        "{country.name} ({country.dial_code})"
                                    }
                                }
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "contact-phone", "Phone" }
                            input {
                                id: "contact-phone",
                                name: "phone",
                                r#type: "tel",
                                placeholder: "Phone number",
                                value: "{phone}",
                                oninput: move |evt| phone.set(evt.value()),
                            }
                            FieldMessage { errors, field: Field::Phone }
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "contact-message", "Message" }
                        textarea {
                            id: "contact-message",
                            name: "message",
                            rows: "5",
                            placeholder: "What are you building?",
                            value: "{message}",
                            oninput: move |evt| message.set(evt.value()),
                        }
                        FieldMessage { errors, field: Field::Message }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting() || !store_ready(),
                        if submitting() { "Sending..." } else { "Send Message" }
                    }
                }
            }
        }

        if let Some((success, text)) = status() {
            StatusModal {
                success,
                message: text,
                on_close: move |_| status.set(None),
            }
        }
    }
}

/// Inline validation message for one field, if it has one.
#[component]
fn FieldMessage(errors: Signal<Vec<FieldError>>, field: Field) -> Element {
    rsx! {
        if let Some(error) = errors.read().iter().find(|e| e.field == field) {
            p { class: "field-error", "{error.message}" }
        }
    }
}
