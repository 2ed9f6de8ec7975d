//! Provider-agnostic engine driving the authorization, token, and profile flows.

pub mod authorization;
mod common;
mod resource_owner;
mod token;

pub use authorization::*;

// self
use crate::{_prelude::*, http::ProviderHttpClient, provider::Provider};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestProviderClient<P> = ProviderClient<P, ReqwestHttpClient>;

/// Drives OAuth 2.0 flows against a single provider.
///
/// The client owns the provider adapter and the HTTP transport; the adapter decides URLs,
/// parameters, and response interpretation while the client performs the requests. Both
/// live behind `Arc`, so clones are cheap and share the same transport.
pub struct ProviderClient<P, C>
where
	P: Provider,
	C: ?Sized + ProviderHttpClient,
{
	/// Provider adapter consulted for every request.
	pub provider: Arc<P>,
	/// HTTP client wrapper used for every outbound provider request.
	pub http_client: Arc<C>,
}
impl<P, C> ProviderClient<P, C>
where
	P: Provider,
	C: ?Sized + ProviderHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(provider: P, http_client: impl Into<Arc<C>>) -> Self {
		Self { provider: Arc::new(provider), http_client: http_client.into() }
	}
}
#[cfg(feature = "reqwest")]
impl<P> ProviderClient<P, ReqwestHttpClient>
where
	P: Provider,
{
	/// Creates a client backed by a default reqwest transport.
	pub fn new(provider: P) -> Self {
		Self::with_http_client(provider, ReqwestHttpClient::default())
	}
}
impl<P, C> Clone for ProviderClient<P, C>
where
	P: Provider,
	C: ?Sized + ProviderHttpClient,
{
	fn clone(&self) -> Self {
		Self { provider: Arc::clone(&self.provider), http_client: Arc::clone(&self.http_client) }
	}
}
impl<P, C> Debug for ProviderClient<P, C>
where
	P: Provider + Debug,
	C: ?Sized + ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ProviderClient").field("provider", &self.provider).finish()
	}
}
