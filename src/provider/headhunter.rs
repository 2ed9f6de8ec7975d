//! HeadHunter (hh.ru) provider adapter.
//!
//! hh.ru deviates from a textbook OAuth 2.0 provider in two places the adapter encodes:
//! the token endpoint expects the request parameters in its query string (with `code`
//! always present, even when empty), and the profile endpoint accepts the access token as
//! an `access_token` query parameter in addition to the bearer header.

mod owner;

pub use owner::*;

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, ProviderError, is_empty_value},
	http::ProviderResponse,
	provider::{
		AuthorizationEndpointProvider, Parameters, ProfileEndpointProvider, ProviderBase,
		ProviderConfig, ProviderEndpoints, TokenEndpointProvider,
	},
};

/// Authorization endpoint.
pub const AUTHORIZATION_URL: &str = "https://hh.ru/oauth/authorize";
/// Token endpoint.
pub const ACCESS_TOKEN_URL: &str = "https://hh.ru/oauth/token";
/// Resource API base.
pub const API_URL: &str = "https://api.hh.ru";

const PROFILE_PATH: &str = "/me";

/// HeadHunter provider adapter.
#[derive(Clone, Debug)]
pub struct HeadHunter {
	config: ProviderConfig,
	endpoints: ProviderEndpoints,
}
impl HeadHunter {
	/// Creates an adapter aimed at the production hh.ru endpoints.
	pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
		let endpoints = ProviderEndpoints::parse(AUTHORIZATION_URL, ACCESS_TOKEN_URL, API_URL)?;

		Self::with_endpoints(config, endpoints)
	}

	/// Creates an adapter with overridden endpoints.
	pub fn with_endpoints(
		config: ProviderConfig,
		endpoints: ProviderEndpoints,
	) -> Result<Self, ConfigError> {
		config.validate()?;

		Ok(Self { config, endpoints })
	}

	/// Creates an adapter from a `clientId`/`clientSecret`/`redirectUri`/`state` mapping.
	pub fn from_options(options: JsonValue) -> Result<Self, ConfigError> {
		Self::new(ProviderConfig::from_options(options)?)
	}

	/// Endpoints in use.
	pub fn endpoints(&self) -> &ProviderEndpoints {
		&self.endpoints
	}
}
impl ProviderBase for HeadHunter {
	fn config(&self) -> &ProviderConfig {
		&self.config
	}

	fn check_response(
		&self,
		response: &ProviderResponse,
		data: &JsonObject,
	) -> Result<(), ProviderError> {
		match data.get("error") {
			Some(error) if !is_empty_value(error) =>
				Err(ProviderError::from_error_response(response, data)),
			_ => Ok(()),
		}
	}
}
impl AuthorizationEndpointProvider for HeadHunter {
	fn base_authorization_url(&self) -> Url {
		self.endpoints.authorization.clone()
	}

	fn authorization_parameters(&self, mut options: Parameters) -> Parameters {
		options.insert("response_type".into(), "code".into());
		options.insert("client_id".into(), self.config.client_id.clone());

		fill_if_blank(&mut options, "state", self.config.state.as_deref());
		fill_if_blank(&mut options, "redirect_uri", self.config.redirect_uri.as_deref());

		options
	}
}
impl TokenEndpointProvider for HeadHunter {
	fn base_access_token_url(&self, params: &Parameters) -> Url {
		let mut url = self.endpoints.token.clone();

		{
			let mut pairs = url.query_pairs_mut();

			if !params.contains_key("code") {
				pairs.append_pair("code", "");
			}
			for (key, value) in params {
				pairs.append_pair(key, value);
			}
		}

		url
	}
}
impl ProfileEndpointProvider for HeadHunter {
	type Owner = HeadHunterResourceOwner;

	fn resource_owner_details_url(&self, token: &AccessToken) -> Url {
		let mut url = self.endpoints.api_url(PROFILE_PATH);

		url.query_pairs_mut().append_pair("access_token", token.expose());

		url
	}

	fn authorization_headers(&self, token: &AccessToken) -> Vec<(String, String)> {
		vec![("Authorization".into(), format!("Bearer {}", token.expose()))]
	}

	fn create_resource_owner(&self, response: JsonObject, _token: &AccessToken) -> Self::Owner {
		HeadHunterResourceOwner::new(response)
	}
}

// Leaves the key absent when neither the caller nor the configuration supplies a value.
fn fill_if_blank(options: &mut Parameters, key: &str, fallback: Option<&str>) {
	if options.get(key).is_some_and(|value| !value.is_empty()) {
		return;
	}

	match fallback {
		Some(value) => {
			options.insert(key.into(), value.into());
		},
		None => {
			options.remove(key);
		},
	}
}
