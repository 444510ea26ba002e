//! # CLI Module
//!
//! This module provides the command-line interface layer for Lektorcli, a
//! Jellyfin API client that groups library items into a named collection
//! based on the languages of their audio tracks.
//!
//! ## Commands
//!
//! - [`collect`] - Creates (or fetches) the target collection, scans every
//!   item of the configured library folder and adds items that have an audio
//!   track in the requested language
//! - [`list_items`] - Displays the library folder's items with optional
//!   search filtering
//! - [`check`] - Runs the audio-language check against a single item
//!
//! ## Error Handling Philosophy
//!
//! The commands distinguish two failure policies on purpose:
//!
//! - **Fatal**: collection creation, library listing and collection inserts
//!   terminate the run via the `error!` macro
//! - **Skip-on-error**: a per-item playback-info failure during `collect`
//!   only skips that item, so a single broken item cannot abort a long scan
//!
//! Each CLI command delegates to the [`crate::jellyfin`] API layer and owns
//! the user interaction: progress feedback, tables and colored status lines.

mod check;
mod collect;
mod items;

pub use check::check;
pub use collect::collect;
pub use items::list_items;
