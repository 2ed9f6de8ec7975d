//! Access tokens issued by the token endpoint.

// self
// crates.io
use serde::{Deserializer, de::Error as _};
// self
use crate::{_prelude::*, error::ResponseError};

/// Redacted secret wrapper keeping token material out of logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Parsed token endpoint response.
///
/// [`AccessToken::expose`] yields the raw access token, which is the value providers embed in
/// profile requests. Fields not modeled explicitly stay available through
/// [`AccessToken::values`].
#[derive(Clone, Serialize, Deserialize)]
pub struct AccessToken {
	/// Access token secret.
	pub access_token: TokenSecret,
	/// Refresh token secret, if the provider issued one.
	pub refresh_token: Option<TokenSecret>,
	/// Token type reported by the provider (`bearer` for most providers).
	pub token_type: Option<String>,
	/// Absolute expiry derived from `expires_in`.
	pub expires_at: Option<OffsetDateTime>,
	/// Resource owner identifier, for providers that return one alongside the token.
	pub resource_owner_id: Option<JsonValue>,
	/// Remaining response fields.
	pub values: JsonObject,
}
impl AccessToken {
	/// Wraps a bare access token with no expiry or extra fields.
	pub fn new(access_token: impl Into<String>) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: None,
			token_type: None,
			expires_at: None,
			resource_owner_id: None,
			values: JsonObject::new(),
		}
	}

	/// Sets the absolute expiry.
	pub fn with_expires_at(mut self, expires_at: OffsetDateTime) -> Self {
		self.expires_at = Some(expires_at);

		self
	}

	/// Sets the refresh token.
	pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
		self.refresh_token = Some(TokenSecret::new(refresh_token));

		self
	}

	/// Raw access token string.
	pub fn expose(&self) -> &str {
		self.access_token.expose()
	}

	/// Returns `true` once the expiry instant has passed; tokens without expiry never expire.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at.is_some_and(|expires_at| instant >= expires_at)
	}

	/// Convenience helper that checks expiry using the current UTC instant.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Maps a decoded token payload into an [`AccessToken`].
	///
	/// `owner_id_key` names the payload field carrying the resource owner id, when the
	/// provider sends one.
	pub(crate) fn from_payload(
		data: JsonObject,
		owner_id_key: Option<&str>,
		issued_at: OffsetDateTime,
		status: u16,
	) -> Result<Self> {
		let payload: TokenPayload = serde_path_to_error::deserialize(JsonValue::Object(data))
			.map_err(|source| ResponseError::TokenParse { source, status })?;
		let TokenPayload { access_token, refresh_token, token_type, expires_in, mut values } =
			payload;
		let expires_at = match expires_in {
			Some(secs) => expiry_from(issued_at, secs)?,
			None => None,
		};
		let resource_owner_id = owner_id_key.and_then(|key| values.remove(key));

		Ok(Self {
			access_token: TokenSecret::new(access_token),
			refresh_token: refresh_token.map(TokenSecret::new),
			token_type,
			expires_at,
			resource_owner_id,
			values,
		})
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessToken")
			.field("access_token", &"<redacted>")
			.field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
			.field("token_type", &self.token_type)
			.field("expires_at", &self.expires_at)
			.field("resource_owner_id", &self.resource_owner_id)
			.finish()
	}
}

#[derive(Deserialize)]
struct TokenPayload {
	access_token: String,
	#[serde(default)]
	refresh_token: Option<String>,
	#[serde(default)]
	token_type: Option<String>,
	#[serde(default, deserialize_with = "expires_in_seconds")]
	expires_in: Option<i64>,
	#[serde(flatten)]
	values: JsonObject,
}

// Providers send the lifetime as an integer, an integral float, or a numeric string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawExpiresIn {
	Integer(i64),
	Float(f64),
	Text(String),
}

fn expires_in_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
	D: Deserializer<'de>,
{
	let Some(raw) = Option::<RawExpiresIn>::deserialize(deserializer)? else {
		return Ok(None);
	};

	match raw {
		RawExpiresIn::Integer(secs) => Ok(Some(secs)),
		RawExpiresIn::Float(secs)
			if secs.fract() == 0.0 && secs >= i64::MIN as f64 && secs <= i64::MAX as f64 =>
			Ok(Some(secs as i64)),
		RawExpiresIn::Text(text) => text
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| D::Error::custom(format!("`expires_in` must be numeric, got {text:?}"))),
		RawExpiresIn::Float(secs) =>
			Err(D::Error::custom(format!("`expires_in` must be whole seconds, got {secs}"))),
	}
}

// Zero means the provider did not commit to a lifetime.
fn expiry_from(issued_at: OffsetDateTime, secs: i64) -> Result<Option<OffsetDateTime>> {
	if secs == 0 {
		return Ok(None);
	}
	if secs < 0 {
		return Err(ResponseError::InvalidExpiresIn { value: secs }.into());
	}

	issued_at
		.checked_add(Duration::seconds(secs))
		.map(Some)
		.ok_or_else(|| ResponseError::InvalidExpiresIn { value: secs }.into())
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::datetime;
	// self
	use super::*;

	fn object(value: JsonValue) -> JsonObject {
		match value {
			JsonValue::Object(map) => map,
			_ => panic!("Fixture must be a JSON object."),
		}
	}

	#[test]
	fn secret_formatters_redact() {
		let secret = TokenSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");

		let token = AccessToken::new("super-secret").with_refresh_token("also-secret");

		assert!(!format!("{token:?}").contains("super-secret"));
	}

	#[test]
	fn payload_maps_known_fields_and_keeps_the_rest() {
		let issued_at = datetime!(2024-05-01 12:00 UTC);
		let data = object(serde_json::json!({
			"access_token": "mock_access_token",
			"token_type": "bearer",
			"expires_in": 3600,
			"refresh_token": "mock_refresh_token",
			"scope": "basic",
		}));
		let token = AccessToken::from_payload(data, None, issued_at, 200)
			.expect("Token payload should map successfully.");

		assert_eq!(token.expose(), "mock_access_token");
		assert_eq!(
			token.refresh_token.as_ref().map(TokenSecret::expose),
			Some("mock_refresh_token")
		);
		assert_eq!(token.token_type.as_deref(), Some("bearer"));
		assert_eq!(token.expires_at, Some(datetime!(2024-05-01 13:00 UTC)));
		assert!(token.resource_owner_id.is_none());
		assert_eq!(token.values.get("scope"), Some(&serde_json::json!("basic")));
		assert!(!token.values.contains_key("access_token"));
		assert!(token.is_expired_at(datetime!(2024-05-01 13:00 UTC)));
		assert!(!token.is_expired_at(datetime!(2024-05-01 12:59 UTC)));
	}

	#[test]
	fn owner_id_key_is_extracted() {
		let data = object(serde_json::json!({ "access_token": "t", "user_id": 7 }));
		let token = AccessToken::from_payload(data, Some("user_id"), OffsetDateTime::now_utc(), 200)
			.expect("Token payload should map successfully.");

		assert_eq!(token.resource_owner_id, Some(serde_json::json!(7)));
		assert!(!token.values.contains_key("user_id"));
	}

	#[test]
	fn missing_access_token_reports_parse_error() {
		let data = object(serde_json::json!({ "token_type": "bearer" }));
		let err = AccessToken::from_payload(data, None, OffsetDateTime::now_utc(), 200)
			.expect_err("Payload without access_token must fail.");

		assert!(matches!(err, Error::Response(ResponseError::TokenParse { status: 200, .. })));
	}

	#[test]
	fn numeric_string_and_float_lifetimes_are_accepted() {
		let issued_at = datetime!(2024-05-01 12:00 UTC);

		for lifetime in [serde_json::json!("3600"), serde_json::json!(3600.0)] {
			let data = object(serde_json::json!({ "access_token": "t", "expires_in": lifetime }));
			let token = AccessToken::from_payload(data, None, issued_at, 200)
				.expect("Numeric lifetimes should map successfully.");

			assert_eq!(token.expires_at, Some(datetime!(2024-05-01 13:00 UTC)));
		}
	}

	#[test]
	fn zero_lifetime_keeps_the_token_without_expiry() {
		let data = object(serde_json::json!({ "access_token": "t", "expires_in": 0 }));
		let token = AccessToken::from_payload(data, None, OffsetDateTime::now_utc(), 200)
			.expect("Zero lifetime must not discard the token.");

		assert_eq!(token.expose(), "t");
		assert!(token.expires_at.is_none());
		assert!(!token.is_expired());
	}

	#[test]
	fn negative_or_garbled_lifetimes_are_rejected() {
		let data = object(serde_json::json!({ "access_token": "t", "expires_in": -5 }));
		let err = AccessToken::from_payload(data, None, OffsetDateTime::now_utc(), 200)
			.expect_err("Negative lifetime must fail.");

		assert!(matches!(err, Error::Response(ResponseError::InvalidExpiresIn { value: -5 })));

		for lifetime in [serde_json::json!("soon"), serde_json::json!(1.5)] {
			let data = object(serde_json::json!({ "access_token": "t", "expires_in": lifetime }));
			let err = AccessToken::from_payload(data, None, OffsetDateTime::now_utc(), 200)
				.expect_err("Non-numeric lifetime must fail.");

			assert!(matches!(err, Error::Response(ResponseError::TokenParse { status: 200, .. })));
		}
	}
}
