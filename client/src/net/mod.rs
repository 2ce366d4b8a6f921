//! Networking modules for the remote REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests, `error` classifies failed responses, and `types`
//! defines the JSON and multipart payloads exchanged with the backend.

pub mod api;
pub mod error;
pub mod types;
