//! Validated endpoint sets and their builder.

// self
use crate::_prelude::*;

/// Errors raised while constructing or validating endpoints.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EndpointError {
	/// Authorization endpoint was not supplied.
	#[error("Missing authorization endpoint.")]
	MissingAuthorizationEndpoint,
	/// Token endpoint was not supplied.
	#[error("Missing token endpoint.")]
	MissingTokenEndpoint,
	/// API base URL was not supplied.
	#[error("Missing API base URL.")]
	MissingApiBase,
	/// Endpoint string could not be parsed.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidUrl {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Endpoint cannot carry a path (e.g. `data:` URLs).
	#[error("The {endpoint} endpoint cannot be used as a base URL: {url}.")]
	CannotBeABase {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Endpoint set used by a provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderEndpoints {
	/// Authorization endpoint the end user is redirected to.
	pub authorization: Url,
	/// Token endpoint used for code exchanges and refreshes.
	pub token: Url,
	/// Base of the provider's resource API.
	pub api_base: Url,
}
impl ProviderEndpoints {
	/// Creates a new builder.
	pub fn builder() -> ProviderEndpointsBuilder {
		ProviderEndpointsBuilder::default()
	}

	/// Parses and validates endpoints given as strings.
	pub fn parse(authorization: &str, token: &str, api_base: &str) -> Result<Self, EndpointError> {
		Self::builder()
			.authorization_endpoint(parse_endpoint("authorization", authorization)?)
			.token_endpoint(parse_endpoint("token", token)?)
			.api_base(parse_endpoint("api", api_base)?)
			.build()
	}

	/// Resolves `path` below the API base, keeping any base path prefix.
	pub fn api_url(&self, path: &str) -> Url {
		let mut url = self.api_base.clone();
		let prefix = url.path().trim_end_matches('/').to_owned();

		url.set_path(&format!("{prefix}/{}", path.trim_start_matches('/')));

		url
	}

	fn validate(&self) -> Result<(), EndpointError> {
		validate_endpoint("authorization", &self.authorization)?;
		validate_endpoint("token", &self.token)?;
		validate_endpoint("api", &self.api_base)?;

		Ok(())
	}
}

/// Builder for [`ProviderEndpoints`] values.
#[derive(Debug, Default)]
pub struct ProviderEndpointsBuilder {
	/// Authorization endpoint.
	pub authorization_endpoint: Option<Url>,
	/// Token endpoint.
	pub token_endpoint: Option<Url>,
	/// API base URL.
	pub api_base: Option<Url>,
}
impl ProviderEndpointsBuilder {
	/// Sets the authorization endpoint.
	pub fn authorization_endpoint(mut self, url: Url) -> Self {
		self.authorization_endpoint = Some(url);

		self
	}

	/// Sets the token endpoint.
	pub fn token_endpoint(mut self, url: Url) -> Self {
		self.token_endpoint = Some(url);

		self
	}

	/// Sets the API base URL.
	pub fn api_base(mut self, url: Url) -> Self {
		self.api_base = Some(url);

		self
	}

	/// Consumes the builder and validates the resulting endpoints.
	pub fn build(self) -> Result<ProviderEndpoints, EndpointError> {
		let authorization =
			self.authorization_endpoint.ok_or(EndpointError::MissingAuthorizationEndpoint)?;
		let token = self.token_endpoint.ok_or(EndpointError::MissingTokenEndpoint)?;
		let api_base = self.api_base.ok_or(EndpointError::MissingApiBase)?;
		let endpoints = ProviderEndpoints { authorization, token, api_base };

		endpoints.validate()?;

		Ok(endpoints)
	}
}

fn parse_endpoint(endpoint: &'static str, raw: &str) -> Result<Url, EndpointError> {
	Url::parse(raw).map_err(|source| EndpointError::InvalidUrl { endpoint, source })
}

fn validate_endpoint(endpoint: &'static str, url: &Url) -> Result<(), EndpointError> {
	if url.scheme() != "https" {
		return Err(EndpointError::InsecureEndpoint { endpoint, url: url.to_string() });
	}
	if url.cannot_be_a_base() {
		return Err(EndpointError::CannotBeABase { endpoint, url: url.to_string() });
	}

	Ok(())
}
