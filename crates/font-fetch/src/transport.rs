//! Blocking HTTP GET behind a small trait so the fetcher can run offline in tests.

use log::debug;
use reqwest::{blocking::Client, header::ACCEPT};

use crate::{Error, Result};

/// Bare user agent; Google Fonts answers it with TrueType URLs instead of WOFF2.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// `Accept` header for stylesheet requests.
pub const ACCEPT_CSS: &str = "text/css,*/*;q=0.1";

/// `Accept` header for binary font requests.
pub const ACCEPT_ANY: &str = "*/*";

/// Something that can perform a single GET and return the response body.
///
/// Implementations must treat any non-success status as [`Error::Status`].
pub trait Transport {
    fn get(&self, url: &str, accept: &str) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str, accept: &str) -> Result<Vec<u8>> {
        (**self).get(url, accept)
    }
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build().map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, accept: &str) -> Result<Vec<u8>> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .map_err(|e| Error::Request { url: url.to_string(), message: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url: url.to_string(), status: status.as_u16() });
        }

        let bytes = response
            .bytes()
            .map_err(|e| Error::Request { url: url.to_string(), message: e.to_string() })?;
        Ok(bytes.to_vec())
    }
}
