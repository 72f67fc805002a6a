//! HTTP request handlers.
//!
//! Controllers extract and validate form payloads, delegate to the service
//! layer, and shape the JSON response. All bodies are form-encoded; every
//! create handler answers 201 with `{"status": "success"}`.

pub mod auth;
pub mod calendar;
pub mod event;
pub mod image;
pub mod user;

#[cfg(test)]
mod test;
