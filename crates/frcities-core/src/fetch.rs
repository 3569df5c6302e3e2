//! Single blocking HTTP GET of the remote dataset.
//!
//! Uses the curl crate (libcurl). The whole body is buffered in memory; there
//! is no retry and no Range handling.

use crate::config::HttpConfig;
use crate::error::GeneratorError;

/// Performs one GET and returns the raw body.
///
/// Non-2xx responses map to [`GeneratorError::Http`]; transport failures to
/// [`GeneratorError::Network`]. Runs in the current thread.
pub fn fetch(url: &str, http: &HttpConfig) -> Result<Vec<u8>, GeneratorError> {
    let network = |source: curl::Error| GeneratorError::Network {
        url: url.to_string(),
        source,
    };

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(network)?;
    easy.get(true).map_err(network)?;
    easy.follow_location(http.follow_redirects).map_err(network)?;
    if http.follow_redirects {
        easy.max_redirections(10).map_err(network)?;
    }
    if let Some(t) = http.connect_timeout() {
        easy.connect_timeout(t).map_err(network)?;
    }
    if let Some(t) = http.timeout() {
        easy.timeout(t).map_err(network)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(network)?;
        transfer.perform().map_err(network)?;
    }

    let status = easy.response_code().map_err(network)?;
    if !(200..300).contains(&status) {
        return Err(GeneratorError::Http {
            url: url.to_string(),
            status,
        });
    }

    tracing::debug!("GET {} returned HTTP {} ({} bytes)", url, status, body.len());
    Ok(body)
}
