//! # Deen Dashboard Library
//!
//! A single page showing today's Gregorian and Hijri dates, the five daily
//! prayer times, Quran surahs with an English translation, a random hadith
//! and a few everyday supplications. All of the data except the
//! supplications comes from public JSON services; this crate orchestrates
//! the requests and renders the results.
//!
//! ## Overview
//!
//! - `api`: typed client for the prayer-time, Quran and hadith services
//! - `config`: JSON5 configuration with defaults for every field
//! - `error`: the crate-wide error type
//! - `region`: render contexts with stale-response protection
//! - `prayer`, `quran`, `hadith`, `dua`: the four page modules
//! - `page`: the dashboard aggregate, HTML template and route handlers
//! - `server`: router and server lifecycle
//!
//! ## Getting Started
//!
//! ```no_run
//! use deen_dashboard::server;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), deen_dashboard::error::DeenError> {
//!     let cancel_token = CancellationToken::new();
//!     server::run(3000, None, cancel_token).await
//! }
//! ```
//!
//! ## Driving the modules directly
//!
//! The modules do not need the web server. Each one paints into a region
//! whose snapshot can be inspected:
//!
//! ```no_run
//! use deen_dashboard::{config::Config, page::Dashboard};
//!
//! # async fn demo() -> deen_dashboard::error::Result<()> {
//! let dashboard = Dashboard::new(&Config::default())?;
//! dashboard.date_prayer().prayer_times_by_city("Cairo", "Egypt").await;
//! let prayer = dashboard.date_prayer().prayer().snapshot();
//! for row in &prayer.rows {
//!     println!("{}: {}", row.name, row.time);
//! }
//! # Ok(())
//! # }
//! ```

/// Client for the remote JSON services
pub mod api;

/// Configuration management module
///
/// Loads settings from a JSON5 file. Every field has a default, so the
/// dashboard runs against the public services without any file at all.
pub mod config;

/// Supplications module
pub mod dua;

/// Custom error types module
///
/// Defines the `DeenError` enum used across the crate. Module operations
/// absorb these errors into fixed user-facing strings; the detail goes to
/// the log.
pub mod error;

/// Random hadith module
pub mod hadith;

/// View models shared by the modules
pub mod models;

/// Dashboard aggregate, page template and route handlers
pub mod page;

/// Date and prayer timings module
pub mod prayer;

/// Quran selector and reader module
pub mod quran;

/// Render contexts
pub mod region;

/// Server operations module
///
/// Sets up the axum routes, serves static assets and manages graceful
/// shutdown.
pub mod server;

/// Date formatting helpers
pub mod utils;
