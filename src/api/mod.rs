//! HTTP API module for the Travel Settlement Engine.
//!
//! Exposes the engine to a presentation layer as JSON over HTTP. The API
//! returns computed figures only; rendering them is the caller's job.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ParseRequest;
pub use response::{ApiError, ParseResponse};
pub use state::AppState;
