//! seace-dashboard library
//!
//! This crate provides the core functionality for the `seace-dashboard` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! - [`fetch`] - Fetch lifecycle (`Idle` → `Loading` → `Loaded`/`Failed`) owned by [`fetch::FetchController`]
//! - [`urgency`] - Urgency bands and remaining-time text derived from hours remaining
//! - [`provider`] - Data providers: the backend's JSON endpoint and a built-in sample dataset
//! - [`ui`] - Terminal rendering of the current state
//! - [`cli`] - Command-line interface
//! - [`config`] - TOML configuration
//! - [`models`] - Announcement and snapshot types
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use seace_dashboard::fetch::FetchController;
//! use seace_dashboard::provider::{HttpProvider, DEFAULT_ENDPOINT};
//! use seace_dashboard::urgency::{build_views, UrgencyThresholds};
//! use seace_dashboard::errors::AppResult;
//!
//! # async fn example() -> AppResult<()> {
//! let controller = FetchController::new(HttpProvider::new(DEFAULT_ENDPOINT)?);
//! controller.refresh().await;
//!
//! if let Some(result) = controller.state().result() {
//!     for view in build_views(&result.items, &UrgencyThresholds::default()) {
//!         println!("{} {}", view.announcement.code, view.remaining_text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod provider;
pub mod ui;
pub mod urgency;
pub mod utils;
