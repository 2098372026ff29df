//! # Catapult - a client SDK for the Catapult telephony API
//!
//! This crate provides authenticated HTTP request helpers with normalized
//! error handling for the Catapult cloud telephony API, plus a small BXML
//! builder for call-control responses.
//!
//! ## Quick Start
//!
//! ```no_run
//! use catapult::{Client, RequestOptions};
//!
//! fn main() -> Result<(), catapult::Error> {
//!     let client = Client::new("userId", "apiToken", "apiSecret")?;
//!
//!     // Fetch account details
//!     let account = client.get(format!("users/{}/account", client.user_id()))?;
//!     println!("Balance: {}", account.data["balance"]);
//!
//!     // Create a call; the id of the new resource comes back from the
//!     // Location header
//!     let options = RequestOptions::new().with_json(&serde_json::json!({
//!         "from": "+19195551212",
//!         "to": "+19195551213",
//!     }))?;
//!     let call = client.make_request("post", format!("users/{}/calls", client.user_id()), options)?;
//!     println!("Created call {}", call.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Any response with a status of 300 or above becomes an [`Error::Api`]
//! carrying the code, message, and status the service reported:
//!
//! ```no_run
//! use catapult::{Client, Error};
//!
//! # fn example() -> Result<(), Error> {
//! # let client = Client::new("userId", "apiToken", "apiSecret")?;
//! match client.get("calls/c-missing") {
//!     Ok(result) => println!("{}", result.data),
//!     Err(Error::Api { code, message, status_code }) => {
//!         // Display form: "Error {code}: {message}"
//!         eprintln!("{}: {} ({})", code, message, status_code);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Errors are never retried or swallowed; every failure surfaces at the call
//! site. Transport-level failures propagate as [`Error::Network`].
//!
//! ## BXML Responses
//!
//! Call-control webhooks answer with BXML. Build the verb elements, wrap
//! them in a [`bxml::BxmlResponse`], and serialize:
//!
//! ```
//! use catapult::bxml::{BxmlResponse, Element};
//!
//! let body = BxmlResponse::new()
//!     .verb(Element::new("SpeakSentence").text("Goodbye"))
//!     .verb(Element::new("Hangup"))
//!     .to_xml();
//!
//! assert_eq!(
//!     body,
//!     b"<xml><Response><SpeakSentence>Goodbye</SpeakSentence><Hangup/></Response></xml>"
//! );
//! ```
//!
//! ## Client Factory
//!
//! The [`client`] function resolves a client kind by (case-insensitive) name
//! from a static registry, for callers that select the backing service at
//! runtime:
//!
//! ```
//! let client = catapult::client("catapult", "userId", "apiToken", "apiSecret").unwrap();
//! ```

pub mod bxml;
mod client;
mod error;
mod options;
mod registry;
mod response;

pub use client::{Client, ClientBuilder, DEFAULT_API_ENDPOINT, DEFAULT_API_VERSION};
pub use error::{Error, Result};
pub use options::RequestOptions;
pub use registry::{client, ClientFactory};
pub use response::{ApiResponse, ApiResult};
