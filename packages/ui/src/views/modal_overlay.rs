use dioxus::prelude::*;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50",
            onclick: move |_| on_close.call(()),
            div {
                class: "card-glassmorphism p-6 rounded-lg shadow-xl max-w-md w-full mx-4",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no prompt shown in a [`ModalOverlay`].
#[component]
pub fn ConfirmDialog(
    message: String,
    #[props(default = "Yes".to_string())] confirm_label: String,
    #[props(default = "No".to_string())] cancel_label: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    use crate::components::{Button, ButtonVariant};

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            p { class: "mb-6 text-slate-700 dark:text-slate-200", "{message}" }
            div {
                class: "flex justify-end gap-3",
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "{cancel_label}"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
