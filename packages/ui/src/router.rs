//! Flat view switching. The current [`View`] lives in a signal; there is no
//! URL routing and no history.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Doctors,
    MyAppointments,
    MyRecords,
    Medicines,
    Labs,
    Blogs,
    Profile,
    Tools,
}

impl View {
    /// Entries of the top navigation bar, in display order.
    pub const NAV: [View; 5] = [
        View::Home,
        View::Doctors,
        View::MyAppointments,
        View::MyRecords,
        View::Profile,
    ];

    pub fn nav_label(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Doctors => "Book Appointment",
            View::MyAppointments => "My Appointments",
            View::MyRecords => "My Records",
            View::Medicines => "Order Medicines",
            View::Labs => "Schedule Tests",
            View::Blogs => "Health Feed",
            View::Profile => "My Profile",
            View::Tools => "Health Tools",
        }
    }
}

/// Keyword routing for the home page quick search. Falls back to doctor search.
pub fn route_for_query(query: &str) -> View {
    let query = query.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| query.contains(w));

    if has(&["med", "pharmacy"]) {
        View::Medicines
    } else if has(&["test", "lab"]) {
        View::Labs
    } else if has(&["blog", "feed"]) {
        View::Blogs
    } else if has(&["bmi", "tool", "health"]) {
        View::Tools
    } else {
        View::Doctors
    }
}

pub fn use_view() -> Signal<View> {
    use_context::<Signal<View>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_routes() {
        assert_eq!(route_for_query("Paracetamol medicine"), View::Medicines);
        assert_eq!(route_for_query("nearby PHARMACY"), View::Medicines);
        assert_eq!(route_for_query("blood test"), View::Labs);
        assert_eq!(route_for_query("lab near me"), View::Labs);
        assert_eq!(route_for_query("latest blog"), View::Blogs);
        assert_eq!(route_for_query("bmi"), View::Tools);
        assert_eq!(route_for_query("health tools"), View::Tools);
        assert_eq!(route_for_query("cardiologist"), View::Doctors);
        assert_eq!(route_for_query(""), View::Doctors);
    }

    #[test]
    fn test_keywords_checked_in_order() {
        // "medical test" hits the medicine keywords first
        assert_eq!(route_for_query("medical test"), View::Medicines);
        assert_eq!(route_for_query("health feed"), View::Blogs);
        // "doctor" contains no keyword
        assert_eq!(route_for_query("doctor"), View::Doctors);
    }
}
