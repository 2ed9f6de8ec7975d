//! Profile retrieval.

// crates.io
use oauth2::http::{Method, Request, header::ACCEPT};
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::ConfigError,
	flows::ProviderClient,
	http::{self, ProviderHttpClient},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provider::{ProfileEndpointProvider, Provider},
};

impl<P, C> ProviderClient<P, C>
where
	P: Provider,
	C: ?Sized + ProviderHttpClient,
{
	/// Fetches the profile for `token` and wraps it in the provider's resource owner type.
	pub async fn resource_owner(
		&self,
		token: &AccessToken,
	) -> Result<<P as ProfileEndpointProvider>::Owner> {
		const KIND: FlowKind = FlowKind::ResourceOwner;

		let span = FlowSpan::new(KIND, "resource_owner");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.provider.resource_owner_details_url(token);
				let mut builder = Request::builder()
					.method(Method::GET)
					.uri(url.as_str())
					.header(ACCEPT, "application/json");

				for (name, value) in self.provider.authorization_headers(token) {
					builder = builder.header(name, value);
				}

				let request = builder.body(Vec::new()).map_err(ConfigError::from)?;
				let response = http::execute(self.http_client.as_ref(), request).await?;
				let data = self.inspect(KIND, &response)?;

				Ok::<_, Error>(self.provider.create_resource_owner(data, token))
			})
			.await;

		obs::record_flow_result(KIND, &result);

		result
	}
}
