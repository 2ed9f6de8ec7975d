//! HeadHunter (hh.ru) OAuth 2.0 provider: fixed endpoints, parameter shaping, error detection,
//! and typed resource owners, driven by a small provider-agnostic engine.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod provider;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		flows::ProviderClient,
		http::ReqwestHttpClient,
		provider::{HeadHunter, ProviderConfig, ProviderEndpoints},
	};

	/// Client type alias used by reqwest-backed integration tests.
	pub type ReqwestTestClient = ProviderClient<HeadHunter, ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Builds endpoints that point at a mock server rooted at `base`.
	pub fn mock_endpoints(base: &str) -> ProviderEndpoints {
		let parse = |path: &str| {
			Url::parse(&format!("{base}{path}")).expect("Failed to parse mock endpoint URL.")
		};

		ProviderEndpoints::builder()
			.authorization_endpoint(parse("/oauth/authorize"))
			.token_endpoint(parse("/oauth/token"))
			.api_base(parse("/"))
			.build()
			.expect("Mock endpoints should pass validation.")
	}

	/// Constructs a [`ProviderClient`] for a HeadHunter adapter aimed at the mock server and
	/// backed by the insecure reqwest transport.
	pub fn build_reqwest_test_client(base: &str, config: ProviderConfig) -> ReqwestTestClient {
		let provider = HeadHunter::with_endpoints(config, mock_endpoints(base))
			.expect("HeadHunter adapter should build for tests.");

		ProviderClient::with_http_client(provider, test_reqwest_http_client())
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};

	/// Decoded JSON object as returned by provider endpoints.
	pub type JsonObject = serde_json::Map<String, JsonValue>;
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, parking_lot as _, tokio as _};
