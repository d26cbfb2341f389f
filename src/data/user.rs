use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);
impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub street: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub zipcode: Option<String>,
}

/// A single user as held by the dashboard.
///
/// Fields the dashboard does not edit (phone, website, company, ...) are kept
/// in `extra` so that merging a form into a record never loses them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRecord {
	pub id: UserId,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub username: String,
	#[serde(default)]
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<Address>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
	pub fn street(&self) -> &str {
		self.address.as_ref().and_then(|addr| addr.street.as_deref()).unwrap_or_default()
	}

	pub fn city(&self) -> &str {
		self.address.as_ref().and_then(|addr| addr.city.as_deref()).unwrap_or_default()
	}

	pub fn zipcode(&self) -> &str {
		self.address.as_ref().and_then(|addr| addr.zipcode.as_deref()).unwrap_or_default()
	}

	/// Case-insensitive substring match against the name only.
	pub fn name_matches(&self, term: &str) -> bool {
		term.is_empty() || self.name.to_lowercase().contains(&term.to_lowercase())
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn parses_placeholder_payload() {
		let json = r#"{
			"id": 1,
			"name": "Leanne Graham",
			"username": "Bret",
			"email": "Sincere@april.biz",
			"address": {
				"street": "Kulas Light",
				"suite": "Apt. 556",
				"city": "Gwenborough",
				"zipcode": "92998-3874",
				"geo": { "lat": "-37.3159", "lng": "81.1496" }
			},
			"phone": "1-770-736-8031 x56442",
			"website": "hildegard.org"
		}"#;
		let user: UserRecord = serde_json::from_str(json).unwrap();
		assert_eq!(user.id, UserId(1));
		assert_eq!(user.username, "Bret");
		assert_eq!(user.city(), "Gwenborough");
		assert_eq!(user.extra.get("website"), Some(&serde_json::json!("hildegard.org")));
	}

	#[test]
	fn partial_payload_defaults() {
		let user: UserRecord = serde_json::from_str(r#"{ "id": 7, "address": { "city": "Lyon" } }"#).unwrap();
		assert_eq!(user.name, "");
		assert_eq!(user.street(), "");
		assert_eq!(user.city(), "Lyon");

		let user: UserRecord = serde_json::from_str(r#"{ "id": 8, "name": "No Address" }"#).unwrap();
		assert!(user.address.is_none());
		assert_eq!(user.zipcode(), "");
	}

	#[test]
	fn extra_fields_survive_serialization() {
		let user: UserRecord = serde_json::from_str(r#"{ "id": 3, "name": "A", "phone": "555" }"#).unwrap();
		let value = serde_json::to_value(&user).unwrap();
		assert_eq!(value["phone"], "555");
		assert_eq!(value["name"], "A");
	}

	#[test]
	fn name_match_ignores_case() {
		let user = UserRecord {
			name: "Ana Smith".into(),
			..Default::default()
		};
		assert!(user.name_matches("ana"));
		assert!(user.name_matches("SMI"));
		assert!(user.name_matches(""));
		assert!(!user.name_matches("bob"));
	}
}
