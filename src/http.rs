//! Transport primitives for provider requests.
//!
//! The module exposes [`ProviderHttpClient`] so callers can plug any HTTP stack into the
//! engine, and [`ProviderResponse`], the status + body view handed to
//! [`ProviderBase::check_response`](crate::provider::ProviderBase::check_response).

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError, HttpRequest, HttpResponse,
	http::header::{CONTENT_TYPE, HeaderValue},
};
// self
use crate::{_prelude::*, error::TransportError};

/// Abstraction over HTTP transports capable of executing provider requests.
///
/// The trait acts as the engine's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so they can be shared across clients, and the handles they return
/// must own whatever state is required so their request futures remain `Send`.
pub trait ProviderHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// [`AsyncHttpClient`] handle used for a single request.
	type Handle: for<'c> AsyncHttpClient<
			'c,
			Error = HttpClientError<Self::TransportError>,
			Future: 'c + Send,
		>
		+ 'static
		+ Send
		+ Sync;

	/// Builds an [`AsyncHttpClient`] handle for the next request.
	fn handle(&self) -> Self::Handle;
}

/// Status, content type, and body of a provider response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderResponse {
	status: u16,
	content_type: Option<String>,
	body: String,
}
impl ProviderResponse {
	/// Creates a response view from a status code and body text.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, content_type: None, body: body.into() }
	}

	/// Attaches the `Content-Type` header value.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());

		self
	}

	/// HTTP status code.
	pub fn status(&self) -> u16 {
		self.status
	}

	/// `Content-Type` header value, when the provider sent one.
	pub fn content_type(&self) -> Option<&str> {
		self.content_type.as_deref()
	}

	/// Raw body text.
	pub fn body(&self) -> &str {
		&self.body
	}
}
impl From<HttpResponse> for ProviderResponse {
	fn from(response: HttpResponse) -> Self {
		let status = response.status().as_u16();
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value: &HeaderValue| value.to_str().ok())
			.map(str::to_owned);
		let body = String::from_utf8_lossy(response.body()).into_owned();

		Self { status, content_type, body }
	}
}

/// Sends `request` through the transport and maps failures into [`Error`].
pub(crate) async fn execute<C>(http_client: &C, request: HttpRequest) -> Result<ProviderResponse>
where
	C: ?Sized + ProviderHttpClient,
{
	let handle = http_client.handle();
	let response = handle.call(request).await.map_err(map_transport_error)?;

	Ok(response.into())
}

fn map_transport_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => TransportError::network(*inner).into(),
		HttpClientError::Http(inner) => crate::error::ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => TransportError::Io(inner).into(),
		HttpClientError::Other(message) => TransportError::Other { message }.into(),
		_ => TransportError::Other { message: "unknown transport failure".into() }.into(),
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Token requests should not follow redirects; configure any custom [`ReqwestClient`]
/// accordingly before wrapping it.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ProviderHttpClient for ReqwestHttpClient {
	type Handle = ReqwestHandle;
	type TransportError = ReqwestError;

	fn handle(&self) -> Self::Handle {
		ReqwestHandle(self.0.clone())
	}
}

/// Per-request handle returned by [`ReqwestHttpClient`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHandle(ReqwestClient);
#[cfg(feature = "reqwest")]
impl<'c> AsyncHttpClient<'c> for ReqwestHandle {
	type Error = HttpClientError<ReqwestError>;
	type Future =
		Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send + Sync>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		let client = self.0.clone();

		Box::pin(async move {
			let response =
				client.execute(request.try_into().map_err(Box::new)?).await.map_err(Box::new)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(Box::new)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
