use reqwest::{Client, Method, header};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Jellyfin's fixed HTTPS port. The server address is configured as a bare
/// host name; the port is not configurable.
pub const JELLYFIN_HTTPS_PORT: u16 = 8920;

/// Connection settings for one Jellyfin server.
///
/// Built once from flags/environment and passed to [`JellyfinClient::new`],
/// so the client carries no ambient global state.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host name or IP address, without scheme or port.
    pub address: String,
    /// API token sent as the `X-Emby-Token` header on every request.
    pub token: String,
    /// Whether to verify the server's TLS certificate.
    ///
    /// Defaults to `false`: self-hosted Jellyfin servers commonly present
    /// self-signed certificates, and trusting any certificate is the
    /// deliberate default of this tool. Enable with
    /// [`ServerConfig::with_certificate_verification`] when the server has a
    /// proper certificate.
    pub verify_certificates: bool,
}

impl ServerConfig {
    pub fn new(address: String, token: String) -> Self {
        ServerConfig {
            address,
            token,
            verify_certificates: false,
        }
    }

    pub fn with_certificate_verification(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }
}

/// Failure of a single API call.
///
/// The taxonomy is deliberately flat: callers only ever branch on "did it
/// fail", never on the kind. The one structural concession is that a decode
/// failure keeps the already-read response body, since the server's text is
/// usually the only clue to what went wrong.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {source}")]
    Decode {
        /// The full response body as received, never discarded.
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// The raw response body, when one was read before the failure.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            ClientError::Decode { raw, .. } => Some(raw.as_str()),
            _ => None,
        }
    }
}

/// Parses a response body as JSON, keeping the raw text on failure.
pub fn decode_body<T: DeserializeOwned>(raw: String) -> Result<T, ClientError> {
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(source) => Err(ClientError::Decode { raw, source }),
    }
}

/// Minimal authenticated JSON-over-HTTPS client for one Jellyfin server.
///
/// Every call performs exactly one outbound request on a freshly built
/// transport: no retries, no caching, no connection reuse between calls, no
/// HTTP status-code policy (a non-2xx body flows into JSON decoding like any
/// other). The full response body is read into memory before returning.
pub struct JellyfinClient {
    config: ServerConfig,
}

impl JellyfinClient {
    pub fn new(config: ServerConfig) -> Self {
        JellyfinClient { config }
    }

    /// Builds the request URL for a server-relative path.
    ///
    /// Plain string concatenation of scheme, host, fixed port and path. The
    /// path is not escaped or validated; callers are responsible for
    /// producing a well-formed path including any query parameters.
    pub fn request_url(&self, path: &str) -> String {
        format!(
            "https://{address}:{port}/{path}",
            address = self.config.address,
            port = JELLYFIN_HTTPS_PORT,
            path = path
        )
    }

    /// Builds one API request without sending it.
    ///
    /// # Arguments
    ///
    /// * `http` - The transport the request will be sent over
    /// * `method` - HTTP verb, passed through without validation
    /// * `path` - Server-relative path, concatenated onto the base URL
    /// * `body` - Optional request body, serialized to JSON when present;
    ///   the request body is empty when `None`
    ///
    /// # Behavior
    ///
    /// The body is encoded here, before any network I/O, so an encode
    /// failure aborts the call without touching the wire. Three headers are
    /// set unconditionally: `Accept: application/json`,
    /// `Content-Type: application/json` and the `X-Emby-Token` auth token.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(reqwest::Request)` - The fully built request, ready to send
    /// - `Err(ClientError)` - Encode or request construction failure
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        http: &Client,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request, ClientError> {
        let payload = match body {
            Some(body) => serde_json::to_vec(body).map_err(ClientError::Encode)?,
            None => Vec::new(),
        };

        let request = http
            .request(method, self.request_url(path))
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-Emby-Token", &self.config.token)
            .body(payload)
            .build()?;
        Ok(request)
    }

    /// Executes one API call and returns the raw response body.
    ///
    /// Builds the request via [`JellyfinClient::build_request`] and sends it
    /// over a freshly constructed transport whose certificate verification
    /// follows [`ServerConfig::verify_certificates`].
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(String)` - The full response body text
    /// - `Err(ClientError)` - Encode or transport failure; no body was read
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, ClientError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!self.config.verify_certificates)
            .build()?;

        let request = self.build_request(&client, method, path, body)?;
        let response = client.execute(request).await?;

        // Consuming the body releases the connection on every path.
        let raw = response.text().await?;
        Ok(raw)
    }

    /// Executes one API call and decodes the response body as JSON.
    ///
    /// Same contract as [`JellyfinClient::execute`]; additionally parses the
    /// body into `T`. Fields missing from the JSON keep their default value
    /// and unknown JSON fields are ignored. On a parse failure the returned
    /// [`ClientError::Decode`] still carries the full raw body.
    pub async fn execute_as<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError> {
        let raw = self.execute(method, path, body).await?;
        decode_body(raw)
    }
}
