//! Data sources: the backend HTTP API, local payload files and the bundled
//! offline dataset.

pub mod api;
pub mod embedded;

pub use api::ApiClient;
pub use embedded::{embedded_payload, embedded_preview};
