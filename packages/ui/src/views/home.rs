use dioxus::prelude::*;

use crate::icons::{
    FaCalendarCheck, FaClipboardList, FaFileMedical, FaFlask, FaHeartPulse, FaMagnifyingGlass,
    FaNewspaper, FaPills, FaUser,
};
use crate::router::{route_for_query, use_view, View};
use crate::{use_session, Icon};

/// Landing page: greeting, quick search, and a card for every section.
#[component]
pub fn HomeView() -> Element {
    let session = use_session();
    let first_name = session()
        .identity
        .map(|identity| identity.first_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "space-y-10",
            div {
                class: "text-center pt-4 pb-8",
                h1 {
                    class: "text-4xl font-extrabold text-slate-800 dark:text-white",
                    "Welcome, {first_name}!"
                }
                p {
                    class: "text-xl text-slate-600 dark:text-slate-300 mt-2",
                    "Find the right care, right now."
                }
                QuickSearch {}
            }

            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-6",
                FeatureCard {
                    view: View::Doctors,
                    title: "Book Appointment",
                    description: "Find specialized doctors near you and book your slot instantly.",
                    wide: true,
                    icon: rsx! { Icon { icon: FaCalendarCheck, width: 24, height: 24 } },
                }
                FeatureCard {
                    view: View::Medicines,
                    title: "Order Medicines",
                    description: "View nearby pharmacy stocks and place an inquiry.",
                    icon: rsx! { Icon { icon: FaPills, width: 24, height: 24 } },
                }
                FeatureCard {
                    view: View::Labs,
                    title: "Schedule Tests",
                    description: "Find nearby labs and schedule home collection or clinic visit.",
                    icon: rsx! { Icon { icon: FaFlask, width: 24, height: 24 } },
                }
                FeatureCard {
                    view: View::MyAppointments,
                    title: "My Appointments",
                    description: "View upcoming bookings and manage cancellations.",
                    icon: rsx! { Icon { icon: FaClipboardList, width: 24, height: 24 } },
                }
                FeatureCard {
                    view: View::MyRecords,
                    title: "My Records",
                    description: "Access your past prescriptions, advice, and history.",
                    icon: rsx! { Icon { icon: FaFileMedical, width: 24, height: 24 } },
                }
                FeatureCard {
                    view: View::Blogs,
                    title: "Health Feed",
                    description: "Read daily articles and expert health content.",
                    icon: rsx! { Icon { icon: FaNewspaper, width: 24, height: 24 } },
                }
                FeatureCard {
                    view: View::Tools,
                    title: "Health Tools",
                    description: "Calculate BMI and track basic fitness stats.",
                    icon: rsx! { Icon { icon: FaHeartPulse, width: 24, height: 24 } },
                }
                FeatureCard {
                    view: View::Profile,
                    title: "My Profile",
                    description: "Update personal details and contact information.",
                    icon: rsx! { Icon { icon: FaUser, width: 24, height: 24 } },
                }
            }
        }
    }
}

#[component]
fn QuickSearch() -> Element {
    let mut view = use_view();
    let mut term = use_signal(String::new);

    let mut go = move || {
        let target = route_for_query(&term.peek());
        tracing::debug!("Quick search {:?} -> {:?}", term.peek(), target);
        view.set(target);
        term.set(String::new());
    };

    rsx! {
        div {
            class: "relative flex items-center w-full max-w-2xl mx-auto md:mt-6",
            span {
                class: "absolute left-4 text-indigo-500",
                Icon { icon: FaMagnifyingGlass, width: 20, height: 20 }
            }
            input {
                r#type: "text",
                class: "w-full p-4 pl-12 rounded-full border-2 border-slate-200 dark:border-slate-700 dark:bg-slate-800 dark:text-white shadow-xl",
                placeholder: "Search for Doctors, Medicines, or Services",
                value: term(),
                oninput: move |evt: FormEvent| term.set(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        go();
                    }
                },
            }
            button {
                class: "absolute right-0 h-full px-6 bg-indigo-600 text-white font-medium rounded-r-full hover:bg-indigo-700",
                title: "Search",
                onclick: move |_| go(),
                Icon { icon: FaMagnifyingGlass, width: 18, height: 18 }
            }
        }
    }
}

#[component]
fn FeatureCard(
    view: View,
    title: String,
    description: String,
    icon: Element,
    #[props(default)] wide: bool,
) -> Element {
    let mut current = use_view();
    let span = if wide { "col-span-2" } else { "" };

    rsx! {
        button {
            class: "p-6 rounded-xl shadow-xl hover:shadow-2xl transition-all text-left card-glassmorphism h-full {span}",
            onclick: move |_| current.set(view),
            div {
                class: "flex flex-col h-full justify-between",
                div {
                    class: "mb-4",
                    div {
                        class: "w-12 h-12 flex items-center justify-center bg-white/20 dark:bg-black/20 rounded-full mb-3 text-indigo-600 dark:text-indigo-300",
                        {icon}
                    }
                    h2 { class: "text-xl font-bold text-slate-800 dark:text-slate-200", "{title}" }
                }
                p { class: "text-sm text-slate-600 dark:text-slate-400", "{description}" }
            }
        }
    }
}
