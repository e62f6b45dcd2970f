use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div {
            class: "flex justify-center items-center w-full h-full p-8",
            div { class: "loader" }
        }
    }
}
