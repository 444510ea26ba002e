//! Configuration management for the Jellyfin collection CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration: the Jellyfin server address, the API
//! token, the library folder to scan, and whether the server's TLS
//! certificate is verified.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, handled by the CLI layer)
//! 2. Environment variables
//! 3. `.env` file in the local data directory

use dotenv;
use std::{env, path::PathBuf};

use crate::Res;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `lektorcli/.env`. This allows users to store
/// the server address and API token without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lektorcli/.env`
/// - macOS: `~/Library/Application Support/lektorcli/.env`
/// - Windows: `%LOCALAPPDATA%/lektorcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error if directory creation or file loading fails.
///
/// # Example
///
/// ```
/// use lektorcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Res<()> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lektorcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    dotenv::from_path(path)?;
    Ok(())
}

/// Returns the Jellyfin server host name or address.
///
/// Retrieves the `JELLYFIN_ADDRESS` environment variable. The value is a bare
/// host name or IP address; the client always uses HTTPS on port 8920.
///
/// # Panics
///
/// Panics if the `JELLYFIN_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let address = jellyfin_address(); // e.g., "jellyfin.example.org"
/// ```
pub fn jellyfin_address() -> String {
    env::var("JELLYFIN_ADDRESS").expect("JELLYFIN_ADDRESS must be set")
}

/// Returns the Jellyfin API token used to authenticate every request.
///
/// Retrieves the `JELLYFIN_TOKEN` environment variable. The token is sent
/// as the `X-Emby-Token` header on every API call.
///
/// # Panics
///
/// Panics if the `JELLYFIN_TOKEN` environment variable is not set.
///
/// # Security Note
///
/// The token grants full API access and should never be exposed in logs
/// or version control.
pub fn jellyfin_token() -> String {
    env::var("JELLYFIN_TOKEN").expect("JELLYFIN_TOKEN must be set")
}

/// Returns the id of the library folder whose children are scanned.
///
/// Retrieves the `JELLYFIN_LIBRARY_ID` environment variable. This is the
/// `ParentId` passed to the items listing endpoint.
///
/// # Panics
///
/// Panics if the `JELLYFIN_LIBRARY_ID` environment variable is not set.
pub fn library_id() -> String {
    env::var("JELLYFIN_LIBRARY_ID").expect("JELLYFIN_LIBRARY_ID must be set")
}

/// Returns whether the server's TLS certificate should be verified.
///
/// Retrieves the `JELLYFIN_VERIFY_CERTIFICATES` environment variable and
/// treats `1` or `true` (case-insensitive) as enabled. Defaults to `false`
/// when unset: most self-hosted Jellyfin servers run with self-signed
/// certificates, and trusting any certificate matches the tool's historical
/// behavior.
///
/// # Example
///
/// ```
/// let verify = verify_certificates(); // false unless explicitly enabled
/// ```
pub fn verify_certificates() -> bool {
    env::var("JELLYFIN_VERIFY_CERTIFICATES")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
