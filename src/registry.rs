//! Client-kind registry and factory.
//!
//! Maps a client-type name to its constructor. The registry is built once,
//! on first use, and is read-only afterwards; lookups are case-insensitive.

use crate::{Client, Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Constructor signature for a registered client kind.
pub type ClientFactory = fn(&str, &str, &str) -> Result<Client>;

// Initialized at most once per process, then read-only.
static REGISTRY: Lazy<HashMap<&'static str, ClientFactory>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, ClientFactory> = HashMap::new();
    registry.insert("catapult", catapult_factory as ClientFactory);
    registry
});

fn catapult_factory(user_id: &str, token: &str, secret: &str) -> Result<Client> {
    Client::new(user_id, token, secret)
}

/// Constructs a client by kind name.
///
/// The name is lowercase-normalized before lookup, so `"catapult"` and
/// `"CATAPULT"` resolve identically.
///
/// # Errors
///
/// Returns [`Error::UnsupportedClient`] for an unrecognized name, and
/// propagates the factory's own configuration errors.
///
/// # Examples
///
/// ```
/// let client = catapult::client("catapult", "userId", "apiToken", "apiSecret").unwrap();
/// assert_eq!(client.user_id(), "userId");
///
/// assert!(catapult::client("no-such-client", "userId", "apiToken", "apiSecret").is_err());
/// ```
pub fn client(
    name: impl AsRef<str>,
    user_id: impl AsRef<str>,
    token: impl AsRef<str>,
    secret: impl AsRef<str>,
) -> Result<Client> {
    let normalized = name.as_ref().to_ascii_lowercase();
    match REGISTRY.get(normalized.as_str()) {
        Some(factory) => factory(user_id.as_ref(), token.as_ref(), secret.as_ref()),
        None => Err(Error::UnsupportedClient(name.as_ref().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_client() {
        let client = client("catapult", "userId", "apiToken", "apiSecret").unwrap();
        assert_eq!(client.user_id(), "userId");
        assert_eq!(client.auth(), ("apiToken", "apiSecret"));
    }

    #[test]
    fn test_supported_client_different_case() {
        let client = client("CAtapult", "userId", "apiToken", "apiSecret").unwrap();
        assert_eq!(client.user_id(), "userId");
    }

    #[test]
    fn test_unsupported_client() {
        let result = client("Non existing client", "userId", "apiToken", "apiSecret");
        match result {
            Err(Error::UnsupportedClient(name)) => {
                assert_eq!(name, "Non existing client");
            }
            _ => panic!("Expected UnsupportedClient, got {:?}", result.map(|_| ())),
        }
    }

    #[test]
    fn test_repeated_resolution_reuses_registry() {
        // The Lazy static resolves the factory map at most once per process;
        // repeated lookups must keep working against the same table.
        for _ in 0..3 {
            assert!(client("catapult", "userId", "apiToken", "apiSecret").is_ok());
        }
    }

    #[test]
    fn test_factory_propagates_configuration_errors() {
        let result = client("catapult", "userId", "", "apiSecret");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
