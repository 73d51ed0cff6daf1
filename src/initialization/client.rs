//! HTTP client initialization.
//!
//! One client is shared by every unit of work in a batch. It is built with
//! redirects disabled: the dispatcher follows redirects manually so each hop
//! can be recorded in the response history.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::DispatchOptions;

/// Initializes the shared HTTP client for a batch.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirect following disabled (hops are tracked manually)
/// - TLS certificate verification disabled (the dispatcher is built for
///   adversarial/unknown endpoints)
/// - The batch-wide upstream proxy, when one is configured
///
/// No client-level timeout is set; each request carries its own deadline
/// from its spec.
///
/// # Errors
///
/// Returns a `reqwest::Error` if the proxy address is malformed or client
/// creation fails.
pub fn init_client(options: &DispatchOptions) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let mut builder = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .danger_accept_invalid_certs(true);

    if let Some(proxy) = &options.proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    let client = builder.build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_options() {
        let options = DispatchOptions::default();
        assert!(init_client(&options).is_ok());
    }

    #[test]
    fn test_init_client_malformed_proxy() {
        let options = DispatchOptions {
            proxy: Some("not a proxy address".to_string()),
            ..Default::default()
        };
        assert!(init_client(&options).is_err());
    }
}
