use dioxus::prelude::*;

use crate::icons::{FaBars, FaMoon, FaStethoscope, FaSun, FaXmark};
use crate::router::{use_view, View};
use crate::theme::{use_theme, Theme};
use crate::{Icon, LogoutButton};

fn item_class(active: bool) -> &'static str {
    if active {
        "bg-black/10 dark:bg-white/10 text-indigo-700 dark:text-white"
    } else {
        "text-slate-600 hover:bg-black/5 dark:text-slate-300 dark:hover:bg-white/5"
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut view = use_view();
    let mut menu_open = use_signal(|| false);

    rsx! {
        nav {
            class: "card-glassmorphism sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between items-center h-16",
                    div {
                        class: "flex-shrink-0 flex items-center gap-2 cursor-pointer",
                        onclick: move |_| view.set(View::Home),
                        span { class: "text-indigo-600", Icon { icon: FaStethoscope, width: 24, height: 24 } }
                        span { class: "font-bold text-xl text-slate-800 dark:text-white", "OPD Nexus" }
                    }

                    div {
                        class: "hidden md:flex items-center space-x-4",
                        for item in View::NAV {
                            button {
                                key: "{item.nav_label()}",
                                class: "px-3 py-2 rounded-md text-sm font-medium transition-colors {item_class(view() == item)}",
                                onclick: move |_| view.set(item),
                                "{item.nav_label()}"
                            }
                        }
                        ThemeToggle {}
                        LogoutButton { class: "p-2 rounded-full text-slate-500 dark:text-slate-400", icon_only: true }
                    }

                    div {
                        class: "md:hidden flex items-center",
                        ThemeToggle {}
                        button {
                            class: "p-2 rounded-md text-slate-500 dark:text-slate-400",
                            onclick: move |_| menu_open.set(!menu_open()),
                            if menu_open() {
                                Icon { icon: FaXmark, width: 20, height: 20 }
                            } else {
                                Icon { icon: FaBars, width: 20, height: 20 }
                            }
                        }
                    }
                }
            }

            if menu_open() {
                div {
                    class: "md:hidden w-full card-glassmorphism shadow-lg z-10 absolute",
                    div {
                        class: "px-2 pt-2 pb-3 space-y-1 sm:px-3",
                        for item in View::NAV {
                            button {
                                key: "{item.nav_label()}",
                                class: "block w-full text-left px-3 py-2 rounded-md text-base font-medium {item_class(view() == item)}",
                                onclick: move |_| {
                                    view.set(item);
                                    menu_open.set(false);
                                },
                                "{item.nav_label()}"
                            }
                        }
                        LogoutButton {
                            class: "block w-full text-left px-3 py-2 text-base",
                            onlogout: move |_| menu_open.set(false),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    rsx! {
        button {
            class: "p-2 rounded-full hover:bg-black/5 dark:hover:bg-white/5 text-slate-500 dark:text-slate-400",
            title: "Toggle theme",
            onclick: move |_| theme.toggle(),
            if theme.current() == Theme::Light {
                Icon { icon: FaMoon, width: 16, height: 16 }
            } else {
                Icon { icon: FaSun, width: 16, height: 16 }
            }
        }
    }
}
