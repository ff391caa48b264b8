//! # trapline-client
//!
//! Client for the Trapline record backend.
//!
//! This crate provides:
//! - The [`Backend`] trait, the seam between the dashboard and its data store
//! - [`TraplineClient`], the reqwest implementation speaking the backend's JSON API
//! - [`ClientConfig`], base-URL configuration read once from the environment
//! - [`MockBackend`], an in-memory backend for tests and demos

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod mock;

pub use backend::Backend;
pub use client::TraplineClient;
pub use config::{ClientConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
pub use error::{Error, Result};
pub use mock::{BackendCall, MockBackend};
