//! Crate-level error types shared by the adapter, the engine, and the transport.

// self
use crate::{_prelude::*, http::ProviderResponse};

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The identity provider reported an OAuth error in its response body.
	#[error(transparent)]
	Provider(#[from] ProviderError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be interpreted.
	#[error(transparent)]
	Response(#[from] ResponseError),
	/// Strict profile field lookup failed.
	#[error(transparent)]
	Profile(#[from] ProfileFieldError),

	/// The `state` returned through the redirect does not match the issued one.
	#[error("Authorization state mismatch.")]
	StateMismatch,
}

/// Error reported by the identity provider through an `error` field in a JSON response.
///
/// Constructed only by [`ProviderError::from_error_response`]; the message is the provider's
/// `error` value, suffixed with `": " + error_description` when a description is present.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{message}")]
pub struct ProviderError {
	message: String,
	status: u16,
	body: String,
}
impl ProviderError {
	/// Builds the error from the HTTP response and its decoded JSON payload.
	pub fn from_error_response(response: &ProviderResponse, data: &JsonObject) -> Self {
		let mut message = data.get("error").map(json_text).unwrap_or_default();

		if let Some(description) =
			data.get("error_description").filter(|value| !is_empty_value(value))
		{
			message.push_str(": ");
			message.push_str(&json_text(description));
		}

		Self { message, status: response.status(), body: response.body().to_owned() }
	}

	/// Human-readable message composed from `error` and `error_description`.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// HTTP status code of the failing response.
	pub fn status(&self) -> u16 {
		self.status
	}

	/// Raw response body text.
	pub fn body(&self) -> &str {
		&self.body
	}
}

/// Configuration and request construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Endpoint set failed validation.
	#[error(transparent)]
	InvalidEndpoints(#[from] crate::provider::EndpointError),
	/// Configuration mapping could not be deserialized.
	#[error("Provider configuration is invalid.")]
	InvalidOptions(#[source] serde_json::Error),

	/// Client identifier is empty.
	#[error("Client identifier must not be empty.")]
	MissingClientId,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure without a structured source.
	#[error("HTTP client error occurred while calling the provider: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures interpreting a provider response body.
#[derive(Debug, ThisError)]
pub enum ResponseError {
	/// Body is not a JSON object.
	#[error("Provider returned a body that is not a JSON object (HTTP {status}).")]
	NotAnObject {
		/// HTTP status code of the response.
		status: u16,
		/// Raw body text.
		body: String,
	},
	/// Token payload did not match the expected shape.
	#[error("Token endpoint returned an unexpected payload.")]
	TokenParse {
		/// Structured parsing failure including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Token payload carried a negative or out-of-range `expires_in`.
	#[error("The expires_in value {value} is not a usable lifetime.")]
	InvalidExpiresIn {
		/// Value reported by the provider.
		value: i64,
	},
}

/// Strict profile field lookup failures.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ProfileFieldError {
	/// Field is absent from the profile payload.
	#[error("Profile field `{field}` is missing.")]
	Missing {
		/// Field name.
		field: &'static str,
	},
	/// Field is present but holds an unexpected JSON type.
	#[error("Profile field `{field}` must be a string or null.")]
	UnexpectedType {
		/// Field name.
		field: &'static str,
	},
}

/// Returns `true` for JSON values treated as "not set": `null`, `false`, `""`, `[]`, `{}`.
pub(crate) fn is_empty_value(value: &JsonValue) -> bool {
	match value {
		JsonValue::Null | JsonValue::Bool(false) => true,
		JsonValue::String(text) => text.is_empty(),
		JsonValue::Array(items) => items.is_empty(),
		JsonValue::Object(fields) => fields.is_empty(),
		_ => false,
	}
}

fn json_text(value: &JsonValue) -> String {
	match value {
		JsonValue::String(text) => text.clone(),
		JsonValue::Null => String::new(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn payload(value: JsonValue) -> JsonObject {
		match value {
			JsonValue::Object(map) => map,
			_ => panic!("Fixture must be a JSON object."),
		}
	}

	#[test]
	fn message_joins_error_and_description() {
		let body = r#"{"error":"Foo error","error_description":"Error description"}"#;
		let response = ProviderResponse::new(400, body);
		let data = payload(serde_json::json!({
			"error": "Foo error",
			"error_description": "Error description",
		}));
		let err = ProviderError::from_error_response(&response, &data);

		assert_eq!(err.message(), "Foo error: Error description");
		assert_eq!(err.to_string(), "Foo error: Error description");
		assert_eq!(err.status(), 400);
		assert_eq!(err.body(), body);
	}

	#[test]
	fn empty_description_is_not_appended() {
		let response = ProviderResponse::new(403, "{}");

		for description in [JsonValue::Null, JsonValue::String(String::new())] {
			let data = payload(serde_json::json!({
				"error": "forbidden",
				"error_description": description,
			}));

			assert_eq!(ProviderError::from_error_response(&response, &data).message(), "forbidden");
		}

		let data = payload(serde_json::json!({ "error": "forbidden" }));

		assert_eq!(ProviderError::from_error_response(&response, &data).message(), "forbidden");
	}

	#[test]
	fn non_string_error_values_are_rendered() {
		let response = ProviderResponse::new(500, "");
		let data = payload(serde_json::json!({ "error": 17, "error_description": true }));

		assert_eq!(ProviderError::from_error_response(&response, &data).message(), "17: true");
	}

	#[test]
	fn empty_value_detection() {
		assert!(is_empty_value(&JsonValue::Null));
		assert!(is_empty_value(&serde_json::json!("")));
		assert!(is_empty_value(&serde_json::json!([])));
		assert!(!is_empty_value(&serde_json::json!("x")));
		assert!(!is_empty_value(&serde_json::json!(0)));
	}
}
