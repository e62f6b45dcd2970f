mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};

mod loader;
pub use loader::Loader;

mod star_rating;
pub use star_rating::{StarInput, StarRating};

mod app_shell;
pub use app_shell::AppShell;

mod auth_page;
pub use auth_page::AuthPage;

mod home;
pub use home::HomeView;

mod doctor_search;
pub use doctor_search::{DoctorSearchView, SearchBox};

mod medicine_search;
pub use medicine_search::{ListingCard, MedicineSearchView};

mod lab_search;
pub use lab_search::LabSearchView;

mod appointments;
pub use appointments::AppointmentsView;

mod review_modal;
pub use review_modal::ReviewModal;

mod records;
pub use records::RecordsView;

mod profile;
pub use profile::ProfileView;

mod blog_feed;
pub use blog_feed::BlogFeedView;

mod tools;
pub use tools::{bmi, BmiCategory, ToolsView};
