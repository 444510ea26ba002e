//! # Jellyfin Integration Module
//!
//! This module provides the interface to the Jellyfin HTTP API used by the
//! application: a minimal authenticated JSON-over-HTTPS client plus thin
//! wrappers for the handful of endpoints the tool consumes.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Jellyfin Integration Layer
//!     ├── Request Client (auth header, TLS, JSON codec)
//!     ├── Item Operations (listing, playback info)
//!     └── Collection Operations (create, add items)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Jellyfin Server API (port 8920)
//! ```
//!
//! ## API Coverage
//!
//! - `POST Collections?name={name}` - create (or fetch) a named collection
//! - `GET Items?ParentId={id}` - list child items of a library folder
//! - `GET Items/{id}/PlaybackInfo` - media sources and streams for one item
//! - `POST Collections/{id}/Items?ids={ids}` - add items to a collection
//!
//! ## Error Handling
//!
//! Every operation returns [`client::ClientError`]. The client never retries
//! and never inspects HTTP status codes; the caller decides whether a failure
//! is fatal. All requests authenticate with a static API token, so there is
//! no token lifecycle to manage.

pub mod client;
pub mod collections;
pub mod items;

pub use client::{ClientError, JellyfinClient, ServerConfig};
