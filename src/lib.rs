//! Review Collector - Conversational Product Review Service
//!
//! Collects product reviews from a messaging webhook by walking each contact
//! through a short fixed dialogue (greeting, product, name, review text), and
//! exposes the stored reviews over a JSON API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
