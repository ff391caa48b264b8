//! # trapline-api
//!
//! Server-rendered web surface for the Trapline dashboard.
//!
//! One page shows the stat tiles, both forms, and both tables. Forms post
//! back to the server, which runs the matching dashboard command and
//! redirects to the page again.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod health;
pub mod page;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{Error, Result};
pub use routes::router;
pub use server::Server;
pub use state::AppState;
