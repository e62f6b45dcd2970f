use dioxus::prelude::*;

use crate::icons::FaStar;
use crate::Icon;

const STARS: usize = 5;

/// Five stars with the first `filled` lit.
#[component]
pub fn StarRating(filled: usize, #[props(default = 16)] size: u32) -> Element {
    rsx! {
        div {
            class: "flex",
            for index in 0..STARS {
                span {
                    key: "{index}",
                    class: if index < filled { "text-yellow-400" } else { "text-slate-300 dark:text-slate-600" },
                    Icon { icon: FaStar, width: size, height: size }
                }
            }
        }
    }
}

/// Clickable star picker. `0` means nothing picked yet.
#[component]
pub fn StarInput(value: u8, onchange: EventHandler<u8>) -> Element {
    rsx! {
        div {
            class: "flex space-x-1 mt-1",
            for star in 1..=api::models::MAX_RATING {
                button {
                    key: "{star}",
                    r#type: "button",
                    class: if star <= value { "text-yellow-400" } else { "text-slate-300 dark:text-slate-600" },
                    title: "{star}",
                    onclick: move |_| onchange.call(star),
                    onmouseover: move |_| onchange.call(star),
                    Icon { icon: FaStar, width: 32, height: 32 }
                }
            }
        }
    }
}
