//! Capability traits a provider implements so the engine can drive it.
//!
//! The traits use crate-owned data types only, so implementations never depend on a
//! particular HTTP client. Override only what you need; the optional hooks default to the
//! behavior most providers expect.

// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ProfileFieldError, ProviderError},
	http::ProviderResponse,
	provider::ProviderConfig,
};

/// Request parameters keyed by name.
pub type Parameters = BTreeMap<String, String>;

/// Configuration access and response inspection shared by every capability.
pub trait ProviderBase: Send + Sync {
	/// Client configuration the provider was constructed with.
	fn config(&self) -> &ProviderConfig;

	/// Inspects a decoded response and reports provider errors.
	///
	/// Runs for token and profile responses alike, before the payload is interpreted.
	fn check_response(&self, response: &ProviderResponse, data: &JsonObject)
	-> Result<(), ProviderError>;
}

/// Authorization endpoint capability.
pub trait AuthorizationEndpointProvider: ProviderBase {
	/// Authorization endpoint without query parameters.
	fn base_authorization_url(&self) -> Url;

	/// Shapes caller-supplied options into the authorization query parameters.
	fn authorization_parameters(&self, options: Parameters) -> Parameters;

	/// Scopes requested when the caller does not pass any.
	fn default_scopes(&self) -> Vec<String> {
		Vec::new()
	}

	/// Separator used to join scopes into the `scope` parameter.
	fn scope_separator(&self) -> &str {
		","
	}
}

/// Token endpoint capability.
pub trait TokenEndpointProvider: ProviderBase {
	/// Token endpoint URL for a request carrying `params`.
	fn base_access_token_url(&self, params: &Parameters) -> Url;

	/// Name of the token response field carrying the resource owner id, if any.
	fn access_token_resource_owner_id_key(&self) -> Option<&str> {
		None
	}
}

/// Profile endpoint capability.
pub trait ProfileEndpointProvider: ProviderBase {
	/// Resource owner type built from profile responses.
	type Owner: ResourceOwner;

	/// Profile endpoint URL for `token`.
	fn resource_owner_details_url(&self, token: &AccessToken) -> Url;

	/// Extra headers attached to authenticated requests.
	fn authorization_headers(&self, _token: &AccessToken) -> Vec<(String, String)> {
		Vec::new()
	}

	/// Wraps a successful profile response.
	fn create_resource_owner(&self, response: JsonObject, token: &AccessToken) -> Self::Owner;
}

/// Every capability the engine needs, implemented automatically.
pub trait Provider:
	AuthorizationEndpointProvider + TokenEndpointProvider + ProfileEndpointProvider
{
}
impl<T> Provider for T where
	T: AuthorizationEndpointProvider + TokenEndpointProvider + ProfileEndpointProvider
{
}

/// Authenticated end user as reported by a provider's profile endpoint.
pub trait ResourceOwner: Send + Sync {
	/// Provider-assigned identifier.
	fn id(&self) -> Result<&JsonValue, ProfileFieldError>;

	/// Full profile payload, exactly as received.
	fn to_map(&self) -> &JsonObject;
}

/// Looks up `key` in a profile payload.
pub fn lookup<'a>(map: &'a JsonObject, key: &str) -> Option<&'a JsonValue> {
	map.get(key)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn lookup_distinguishes_absent_from_null() {
		let map = serde_json::json!({ "id": 42, "middle_name": null });
		let map = map.as_object().expect("Fixture should be an object.");

		assert_eq!(lookup(map, "id"), Some(&JsonValue::from(42)));
		assert_eq!(lookup(map, "middle_name"), Some(&JsonValue::Null));
		assert_eq!(lookup(map, "email"), None);
	}
}
