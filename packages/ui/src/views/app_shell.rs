use dioxus::prelude::*;

use super::{
    AppointmentsView, AuthPage, BlogFeedView, DoctorSearchView, HomeView, LabSearchView,
    MedicineSearchView, ProfileView, RecordsView, ToolsView,
};
use crate::router::View;
use crate::{use_session, Navbar};

/// Top-level layout. Without an authenticated session only the sign-in
/// page renders.
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let mut view = use_context_provider(|| Signal::new(View::default()));

    let authenticated = session().is_authenticated();
    use_effect(move || {
        if !session().is_authenticated() {
            view.set(View::Home);
        }
    });

    if !authenticated {
        return rsx! { AuthPage {} };
    }

    rsx! {
        div {
            class: "flex flex-col min-h-screen font-sans transition-colors duration-200",
            Navbar {}
            main {
                class: "flex-1 w-full max-w-7xl mx-auto p-4 md:p-8 pt-8",
                {match view() {
                    View::Home => rsx! { HomeView {} },
                    View::Doctors => rsx! { DoctorSearchView {} },
                    View::MyAppointments => rsx! { AppointmentsView {} },
                    View::MyRecords => rsx! { RecordsView {} },
                    View::Medicines => rsx! { MedicineSearchView {} },
                    View::Labs => rsx! { LabSearchView {} },
                    View::Blogs => rsx! { BlogFeedView {} },
                    View::Profile => rsx! { ProfileView {} },
                    View::Tools => rsx! { ToolsView {} },
                }}
            }
        }
    }
}
