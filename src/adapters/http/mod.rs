//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own adapter; `router` assembles them.

pub mod review;
pub mod router;
pub mod system;
pub mod webhook;

pub use router::{api_router, HttpHandlers};
