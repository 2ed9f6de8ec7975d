// self
use crate::{
	_prelude::*,
	error::ProfileFieldError,
	provider::{ResourceOwner, lookup},
};

/// HeadHunter user profile as returned by `GET /me`.
///
/// Accessors use a strict policy: a field absent from the payload is an error rather than an
/// implicit empty value. Name fields may legitimately be `null` (hh.ru omits unset middle
/// names this way), which surfaces as `Ok(None)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadHunterResourceOwner {
	response: JsonObject,
}
impl HeadHunterResourceOwner {
	/// Wraps a decoded profile payload.
	pub fn new(response: JsonObject) -> Self {
		Self { response }
	}

	/// User identifier (a string on hh.ru, kept as raw JSON).
	pub fn id(&self) -> Result<&JsonValue, ProfileFieldError> {
		self.field("id")
	}

	/// Last name.
	pub fn last_name(&self) -> Result<Option<&str>, ProfileFieldError> {
		self.name("last_name")
	}

	/// First name.
	pub fn first_name(&self) -> Result<Option<&str>, ProfileFieldError> {
		self.name("first_name")
	}

	/// Middle name.
	pub fn middle_name(&self) -> Result<Option<&str>, ProfileFieldError> {
		self.name("middle_name")
	}

	/// Full profile payload, exactly as received.
	pub fn to_map(&self) -> &JsonObject {
		&self.response
	}

	/// Hands the payload back.
	pub fn into_map(self) -> JsonObject {
		self.response
	}

	fn field(&self, field: &'static str) -> Result<&JsonValue, ProfileFieldError> {
		lookup(&self.response, field).ok_or(ProfileFieldError::Missing { field })
	}

	fn name(&self, field: &'static str) -> Result<Option<&str>, ProfileFieldError> {
		match self.field(field)? {
			JsonValue::Null => Ok(None),
			JsonValue::String(value) => Ok(Some(value)),
			_ => Err(ProfileFieldError::UnexpectedType { field }),
		}
	}
}
impl ResourceOwner for HeadHunterResourceOwner {
	fn id(&self) -> Result<&JsonValue, ProfileFieldError> {
		HeadHunterResourceOwner::id(self)
	}

	fn to_map(&self) -> &JsonObject {
		HeadHunterResourceOwner::to_map(self)
	}
}
impl From<HeadHunterResourceOwner> for JsonObject {
	fn from(owner: HeadHunterResourceOwner) -> Self {
		owner.into_map()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn owner(value: JsonValue) -> HeadHunterResourceOwner {
		match value {
			JsonValue::Object(map) => HeadHunterResourceOwner::new(map),
			_ => panic!("Fixture must be a JSON object."),
		}
	}

	#[test]
	fn accessors_read_profile_fields() {
		let owner = owner(serde_json::json!({
			"id": 12345678,
			"last_name": "lst_name",
			"first_name": "first_name",
			"middle_name": "middle_name",
			"email": "email",
		}));

		assert_eq!(owner.id(), Ok(&serde_json::json!(12345678)));
		assert_eq!(owner.last_name(), Ok(Some("lst_name")));
		assert_eq!(owner.first_name(), Ok(Some("first_name")));
		assert_eq!(owner.middle_name(), Ok(Some("middle_name")));
		assert!(owner.to_map().contains_key("email"));
	}

	#[test]
	fn missing_fields_fail_and_null_names_are_absent() {
		let owner = owner(serde_json::json!({ "id": "1", "middle_name": null, "last_name": 5 }));

		assert_eq!(owner.middle_name(), Ok(None));
		assert_eq!(owner.first_name(), Err(ProfileFieldError::Missing { field: "first_name" }));
		assert_eq!(
			owner.last_name(),
			Err(ProfileFieldError::UnexpectedType { field: "last_name" })
		);
	}

	#[test]
	fn to_map_round_trips_payload() {
		let payload = serde_json::json!({ "id": "7", "is_admin": false, "phone": "+7" });
		let owner = owner(payload.clone());

		assert_eq!(JsonValue::Object(owner.to_map().clone()), payload);
		assert_eq!(
			serde_json::to_value(&owner).expect("Owner should serialize transparently."),
			payload
		);
		assert_eq!(JsonValue::Object(owner.into_map()), payload);
	}
}
