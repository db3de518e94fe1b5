//! Submission Status Modal
//!
//! The "thank you / something went wrong" popup shown after a contact
//! form submission. Closes on its button or a backdrop click.

use dioxus::prelude::*;

#[component]
pub fn StatusModal(
    /// Whether the submission succeeded (drives styling only)
    success: bool,
    /// Message shown to the visitor
    message: String,
    /// Handler called when the modal is dismissed
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: if success { "modal status-modal" } else { "modal status-modal error" },
                onclick: move |evt| evt.stop_propagation(),

                p { class: "status-message", "{message}" }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
