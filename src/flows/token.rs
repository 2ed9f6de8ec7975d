//! Authorization code and refresh token exchanges.
//!
//! Parameters go to the provider twice: through
//! [`TokenEndpointProvider::base_access_token_url`](crate::provider::TokenEndpointProvider::base_access_token_url),
//! which may fold them into the query string, and as the form-encoded POST body.

// crates.io
use oauth2::http::{
	Method, Request,
	header::{ACCEPT, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::ConfigError,
	flows::{ProviderClient, common},
	http::{self, ProviderHttpClient},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provider::{Parameters, Provider},
};

impl<P, C> ProviderClient<P, C>
where
	P: Provider,
	C: ?Sized + ProviderHttpClient,
{
	/// Exchanges an authorization code for an access token.
	pub async fn access_token(&self, code: &str) -> Result<AccessToken> {
		let mut params = Parameters::new();

		params.insert("code".into(), code.into());

		self.request_token(FlowKind::AuthorizationCode, "authorization_code", params).await
	}

	/// Exchanges a refresh token for a new access token.
	pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<AccessToken> {
		let mut params = Parameters::new();

		params.insert("refresh_token".into(), refresh_token.into());

		self.request_token(FlowKind::Refresh, "refresh_token", params).await
	}

	async fn request_token(
		&self,
		kind: FlowKind,
		grant_type: &'static str,
		mut params: Parameters,
	) -> Result<AccessToken> {
		let span = FlowSpan::new(kind, "request_token");

		obs::record_flow_outcome(kind, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let config = self.provider.config();

				params.insert("grant_type".into(), grant_type.into());
				params.insert("client_id".into(), config.client_id.clone());

				if let Some(secret) = &config.client_secret {
					params.insert("client_secret".into(), secret.expose().to_owned());
				}
				if let Some(redirect_uri) =
					config.redirect_uri.as_deref().filter(|value| !value.is_empty())
				{
					params.insert("redirect_uri".into(), redirect_uri.to_owned());
				}

				let url = self.provider.base_access_token_url(&params);
				let request = Request::builder()
					.method(Method::POST)
					.uri(url.as_str())
					.header(ACCEPT, "application/json")
					.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
					.body(common::form_body(&params).into_bytes())
					.map_err(ConfigError::from)?;
				let response = http::execute(self.http_client.as_ref(), request).await?;
				let data = self.inspect(kind, &response)?;

				AccessToken::from_payload(
					data,
					self.provider.access_token_resource_owner_id_key(),
					OffsetDateTime::now_utc(),
					response.status(),
				)
			})
			.await;

		obs::record_flow_result(kind, &result);

		result
	}
}
