//! Client for the Buffer social-media scheduling REST API (v1).
//!
//! [`BufferClient`] wraps an authenticated `reqwest` client and exposes the
//! generic request layer ([`BufferClient::api`], [`BufferClient::get`],
//! [`BufferClient::post`]) plus typed operations for profiles and updates.

pub mod client;
pub mod error;
pub mod form;
pub mod types;

pub use client::{normalize_path, BufferClient};
pub use error::BufferError;
pub use form::FormEncode;
pub use types::{NewUpdate, Profile, Schedule, Update, UpdateResponse};
