use dioxus::prelude::*;

/// Blocking yes/no prompt. Nothing happens until the user picks a side;
/// cancelling leaves every piece of state unchanged.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "dialog-overlay",
            div {
                class: "dialog confirm-dialog",
                p { class: "confirm-message", "{message}" }
                div {
                    class: "form-actions",
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "danger",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
