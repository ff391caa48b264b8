//! # trapline-dashboard
//!
//! The dashboard controller and everything it owns.
//!
//! [`Dashboard`] holds the application state (two fetched collections, two
//! form drafts, a loading flag and an error banner) and exposes it only
//! through [`Command`]s. Surfaces subscribe to published snapshots and render
//! them through [`DashboardView`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use trapline_client::{ClientConfig, TraplineClient};
//! use trapline_dashboard::{Command, Dashboard, DashboardView};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = TraplineClient::new(ClientConfig::from_env())?;
//! let mut dashboard = Dashboard::new(Arc::new(client));
//! dashboard.dispatch(Command::Load).await?;
//! let view = DashboardView::from(&dashboard.state());
//! println!("{}", view.tiles[0].value);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod command;
pub mod controller;
pub mod error;
pub mod notifier;
pub mod state;
pub mod view;

pub use command::Command;
pub use controller::Dashboard;
pub use error::{Error, Result};
pub use notifier::{FlashNotifier, LogNotifier, Notifier, RecordingNotifier, StderrNotifier};
pub use state::DashboardState;
pub use view::{DashboardView, HarvestRow, InvestmentRow};
