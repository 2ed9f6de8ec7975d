//! Plugs a non-reqwest transport into the engine.
//!
//! 1. Implement [`ProviderHttpClient`] and hand out an [`AsyncHttpClient`] handle per request.
//! 2. Box transport failures inside `HttpClientError::Reqwest`; the engine maps them to
//!    `TransportError::Network`.
//! 3. Pass the client to [`ProviderClient::with_http_client`].

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
	future::Future,
	pin::Pin,
};
// crates.io
use color_eyre::Result;
use oauth2::{AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse};
// self
use oauth2_headhunter::{
	flows::ProviderClient,
	http::ProviderHttpClient,
	provider::{HeadHunter, ProviderConfig},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let config = ProviderConfig::new("demo-client")
		.with_client_secret("demo-secret")
		.with_redirect_uri("https://app.example.com/oauth/hh/callback");
	let client: ProviderClient<HeadHunter, MockHttpClient> =
		ProviderClient::with_http_client(HeadHunter::new(config.clone())?, MockHttpClient::Success);
	let token = client.access_token("demo-code").await?;

	println!("Access token issued by the mock transport: {}.", token.expose());

	let owner = client.resource_owner(&token).await?;

	println!("Resource owner: {:?} {:?}.", owner.first_name()?, owner.last_name()?);

	let failing: ProviderClient<HeadHunter, MockHttpClient> =
		ProviderClient::with_http_client(HeadHunter::new(config)?, MockHttpClient::Unreachable);

	match failing.access_token("demo-code").await {
		Ok(_) => println!("Mock transport unexpectedly succeeded."),
		Err(e) => println!("Transport error surfaced by the engine: {e}."),
	}

	Ok(())
}

#[derive(Debug)]
struct MockTransportError;
impl Display for MockTransportError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "hh.ru is unreachable")
	}
}
impl StdError for MockTransportError {}

#[derive(Clone, Copy)]
enum MockHttpClient {
	Success,
	Unreachable,
}
impl ProviderHttpClient for MockHttpClient {
	type Handle = MockHttpHandle;
	type TransportError = MockTransportError;

	fn handle(&self) -> Self::Handle {
		MockHttpHandle(*self)
	}
}

struct MockHttpHandle(MockHttpClient);
impl<'a> AsyncHttpClient<'a> for MockHttpHandle {
	type Error = HttpClientError<MockTransportError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'a + Send + Sync>>;

	fn call(&'a self, request: HttpRequest) -> Self::Future {
		let behavior = self.0;

		Box::pin(async move {
			match behavior {
				MockHttpClient::Success if request.uri().path() == "/me" => Ok(HttpResponse::new(
					br#"{"id":"42","first_name":"Ivan","last_name":"Petrov"}"#.to_vec(),
				)),
				MockHttpClient::Success => Ok(HttpResponse::new(
					br#"{"access_token":"mock-access","token_type":"bearer","expires_in":900}"#
						.to_vec(),
				)),
				MockHttpClient::Unreachable => {
					Err(HttpClientError::Reqwest(Box::new(MockTransportError)))
				},
			}
		})
	}
}
