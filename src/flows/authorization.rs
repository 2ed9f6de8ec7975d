//! Authorization URL assembly and state validation.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::{
	_prelude::*,
	flows::ProviderClient,
	http::ProviderHttpClient,
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
	provider::{Parameters, Provider},
};

const STATE_LEN: usize = 32;

/// Authorization redirect returned by [`ProviderClient::authorization_url`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorizationRequest {
	/// Fully-formed authorize URL that callers should send end-users to.
	pub url: Url,
	/// Opaque state value that must round-trip via the redirect handler.
	pub state: String,
}
impl AuthorizationRequest {
	/// Validates the returned `state` parameter after the authorization redirect.
	pub fn validate_state(&self, returned_state: &str) -> Result<()> {
		if returned_state == self.state { Ok(()) } else { Err(Error::StateMismatch) }
	}
}

impl<P, C> ProviderClient<P, C>
where
	P: Provider,
	C: ?Sized + ProviderHttpClient,
{
	/// Builds the authorization redirect for `options`.
	///
	/// Default scopes are added when the caller passes no `scope`. The provider shapes the
	/// parameters; if neither the caller nor the provider configuration supplied a `state`,
	/// a random one is generated here.
	pub fn authorization_url(&self, mut options: Parameters) -> AuthorizationRequest {
		const KIND: FlowKind = FlowKind::Authorization;

		let _span = FlowSpan::new(KIND, "authorization_url").entered();

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		if !options.contains_key("scope") {
			let scopes = self.provider.default_scopes();

			if !scopes.is_empty() {
				options.insert("scope".into(), scopes.join(self.provider.scope_separator()));
			}
		}

		let mut params = self.provider.authorization_parameters(options);
		let state = match params.get("state").filter(|state| !state.is_empty()) {
			Some(state) => state.clone(),
			None => {
				let state = random_state();

				params.insert("state".into(), state.clone());

				state
			},
		};
		let mut url = self.provider.base_authorization_url();

		{
			let mut pairs = url.query_pairs_mut();

			for (key, value) in &params {
				pairs.append_pair(key, value);
			}
		}

		obs::record_flow_outcome(KIND, FlowOutcome::Success);

		AuthorizationRequest { url, state }
	}
}

fn random_state() -> String {
	rand::rng().sample_iter(Alphanumeric).take(STATE_LEN).map(char::from).collect()
}
