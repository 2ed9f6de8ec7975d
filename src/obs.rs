//! Spans, counters, and warnings emitted by [`ProviderClient`](crate::flows::ProviderClient).
//!
//! Every client operation (authorization URL, code exchange, refresh, profile fetch) is a
//! flow. Both sinks are compiled out unless their feature is on.
//!
//! # Feature Flags
//!
//! - `tracing`: each flow runs in an `oauth2_headhunter.flow` span carrying `flow` and
//!   `stage`. Errors reported by hh.ru in a response body become a `warn` event with the
//!   HTTP status and provider message; response bodies and tokens are never recorded.
//! - `metrics`: the `oauth2_headhunter_flow_total` counter is bumped once on entry and once
//!   on exit of each flow, labeled by `flow` and `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Client operation a span or counter belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// [`ProviderClient::authorization_url`](crate::flows::ProviderClient::authorization_url).
	Authorization,
	/// [`ProviderClient::access_token`](crate::flows::ProviderClient::access_token).
	AuthorizationCode,
	/// [`ProviderClient::refresh_access_token`](crate::flows::ProviderClient::refresh_access_token).
	Refresh,
	/// [`ProviderClient::resource_owner`](crate::flows::ProviderClient::resource_owner).
	ResourceOwner,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Authorization => "authorization",
			FlowKind::AuthorizationCode => "authorization_code",
			FlowKind::Refresh => "refresh",
			FlowKind::ResourceOwner => "resource_owner",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// `outcome` label of the flow counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Flow started.
	Attempt,
	/// Flow returned `Ok`.
	Success,
	/// Flow returned `Err`, including provider-reported errors.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_match_client_operations() {
		let labels = [
			FlowKind::Authorization,
			FlowKind::AuthorizationCode,
			FlowKind::Refresh,
			FlowKind::ResourceOwner,
		]
		.map(FlowKind::as_str);

		assert_eq!(labels, ["authorization", "authorization_code", "refresh", "resource_owner"]);
		assert_eq!(FlowOutcome::Failure.to_string(), "failure");
	}
}
