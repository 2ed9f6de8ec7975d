//! Shared helpers for flow implementations (body decoding, form encoding, response checks).

// crates.io
use url::form_urlencoded::{self, Serializer};
// self
use crate::{
	_prelude::*,
	error::ResponseError,
	flows::ProviderClient,
	http::{ProviderHttpClient, ProviderResponse},
	obs::{self, FlowKind},
	provider::{Parameters, Provider},
};

/// Decodes a response body into an object.
///
/// Form-encoded bodies (some token endpoints answer with `application/x-www-form-urlencoded`)
/// become an object of string values; anything else must be a JSON object.
pub(crate) fn parse_object(response: &ProviderResponse) -> Result<JsonObject> {
	if response.content_type().is_some_and(|content_type| content_type.contains("urlencoded")) {
		return Ok(form_urlencoded::parse(response.body().as_bytes())
			.map(|(key, value)| (key.into_owned(), JsonValue::String(value.into_owned())))
			.collect());
	}

	match serde_json::from_str::<JsonValue>(response.body()) {
		Ok(JsonValue::Object(data)) => Ok(data),
		_ => Err(ResponseError::NotAnObject {
			status: response.status(),
			body: response.body().to_owned(),
		}
		.into()),
	}
}

/// Encodes parameters as an `application/x-www-form-urlencoded` body.
pub(crate) fn form_body(params: &Parameters) -> String {
	let mut serializer = Serializer::new(String::new());

	for (key, value) in params {
		serializer.append_pair(key, value);
	}

	serializer.finish()
}

impl<P, C> ProviderClient<P, C>
where
	P: Provider,
	C: ?Sized + ProviderHttpClient,
{
	/// Decodes `response` and lets the provider reject error payloads.
	pub(crate) fn inspect(&self, kind: FlowKind, response: &ProviderResponse) -> Result<JsonObject> {
		let data = parse_object(response)?;

		self.provider
			.check_response(response, &data)
			.inspect_err(|err| obs::record_provider_error(kind, err))?;

		Ok(data)
	}
}
