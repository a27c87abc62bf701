//! Client-side plumbing for talking to the conversion service.

mod api;

pub use api::{ApiClient, ClientError, Submission};
