//! # API crate: typed client for the OPD Nexus patient backend
//!
//! Everything the frontends know about the backend lives here: the bearer
//! token and who it says is logged in, the transport that attaches it, and
//! one method per backend route.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Token decoding, [`SessionStore`], login/register/Google/logout |
//! | [`transport`] | [`ApiClient`], [`HttpBackend`], 401/204/error mapping |
//! | [`models`] | Wire types and the appointment/review/profile rules |
//! | [`config`] | Layered [`ClientConfig`] loading |
//! | [`search`] | Stale-response guard and minimum query length |
//! | `patient` | `/patient/*` routes (profile, appointments, records, reviews) |
//! | `catalog` | Doctor/pharmacy/lab search and the article feed |

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod transport;

mod catalog;
mod patient;

pub use auth::{Session, SessionStore, SESSION_TOKEN_KEY};
pub use config::load_config;
pub use error::{ClientError, GENERIC_API_ERROR};
pub use models::*;
pub use search::{is_searchable, QueryGeneration, Ticket};
pub use transport::{ApiClient, HttpBackend, Method, PatientClient, RequestOptions};

pub use store::{ClientConfig, KeyValueStore, MemoryStore};
