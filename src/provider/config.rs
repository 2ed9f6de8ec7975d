//! Client credentials, redirect URI, and state a provider is constructed with.

// self
use crate::{_prelude::*, auth::TokenSecret, error::ConfigError};

/// Client configuration a provider is constructed with.
///
/// Deserializes from the camelCase mapping providers traditionally accept
/// (`clientId`, `clientSecret`, `redirectUri`, `state`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// Client secret sent with token requests.
	#[serde(default)]
	pub client_secret: Option<TokenSecret>,
	/// Redirect URI registered with the provider.
	#[serde(default)]
	pub redirect_uri: Option<String>,
	/// Fixed `state` used when the caller does not pass one.
	#[serde(default)]
	pub state: Option<String>,
}
impl ProviderConfig {
	/// Creates a configuration holding only the client identifier.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), client_secret: None, redirect_uri: None, state: None }
	}

	/// Deserializes and validates a configuration mapping.
	pub fn from_options(options: JsonValue) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_value(options).map_err(ConfigError::InvalidOptions)?;

		config.validate()?;

		Ok(config)
	}

	/// Sets the client secret.
	pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
		self.client_secret = Some(TokenSecret::new(secret));

		self
	}

	/// Sets the redirect URI.
	pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
		self.redirect_uri = Some(redirect_uri.into());

		self
	}

	/// Sets the fixed state.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}

	/// Checks the configuration invariants.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.client_id.trim().is_empty() {
			return Err(ConfigError::MissingClientId);
		}

		Ok(())
	}
}
impl Debug for ProviderConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderConfig")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &self.client_secret.is_some())
			.field("redirect_uri", &self.redirect_uri)
			.field("state", &self.state)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn options_mapping_uses_camel_case_keys() {
		let config = ProviderConfig::from_options(serde_json::json!({
			"clientId": "mock_client_id",
			"clientSecret": "mock_secret",
			"redirectUri": "mock_redirect_uri",
		}))
		.expect("Options mapping should deserialize.");

		assert_eq!(config.client_id, "mock_client_id");
		assert_eq!(config.client_secret.as_ref().map(TokenSecret::expose), Some("mock_secret"));
		assert_eq!(config.redirect_uri.as_deref(), Some("mock_redirect_uri"));
		assert!(config.state.is_none());
		assert!(!format!("{config:?}").contains("mock_secret"));
	}

	#[test]
	fn rejects_blank_client_id_and_bad_shapes() {
		let err = ProviderConfig::from_options(serde_json::json!({ "clientId": " " }))
			.expect_err("Blank client id must be rejected.");

		assert!(matches!(err, ConfigError::MissingClientId));

		let err = ProviderConfig::from_options(serde_json::json!({ "clientSecret": "s" }))
			.expect_err("Missing client id must be rejected.");

		assert!(matches!(err, ConfigError::InvalidOptions(_)));
	}
}
