use super::{Address, UserId, UserRecord};
use enum_map::{Enum, EnumMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Field {
	Name,
	Username,
	Email,
	Street,
	City,
	Zipcode,
}

impl Field {
	pub fn all() -> [Self; 6] {
		[
			Self::Name,
			Self::Username,
			Self::Email,
			Self::Street,
			Self::City,
			Self::Zipcode,
		]
	}

	pub fn id(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Username => "username",
			Self::Email => "email",
			Self::Street => "street",
			Self::City => "city",
			Self::Zipcode => "zipcode",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Name => "Name",
			Self::Username => "Username",
			Self::Email => "Email",
			Self::Street => "Street",
			Self::City => "City",
			Self::Zipcode => "Zipcode",
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("unknown form field {0:?}")]
pub struct UnknownField(pub String);

impl std::str::FromStr for Field {
	type Err = UnknownField;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::all()
			.into_iter()
			.find(|field| field.id() == s)
			.ok_or_else(|| UnknownField(s.to_owned()))
	}
}

/// The flattened, editable shape of a user. Holds no reference back to the
/// record it was seeded from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState(EnumMap<Field, String>);

impl FormState {
	pub fn for_create() -> Self {
		Self::default()
	}

	pub fn for_edit(record: &UserRecord) -> Self {
		let mut form = Self::default();
		form.set_field(Field::Name, record.name.clone());
		form.set_field(Field::Username, record.username.clone());
		form.set_field(Field::Email, record.email.clone());
		form.set_field(Field::Street, record.street());
		form.set_field(Field::City, record.city());
		form.set_field(Field::Zipcode, record.zipcode());
		form
	}

	#[cfg(test)]
	pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
		self.set_field(field, value);
		self
	}

	pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
		self.0[field] = value.into();
	}

	pub fn get(&self, field: Field) -> &str {
		&self.0[field]
	}

	pub fn address(&self) -> Address {
		Address {
			street: Some(self.get(Field::Street).to_owned()),
			city: Some(self.get(Field::City).to_owned()),
			zipcode: Some(self.get(Field::Zipcode).to_owned()),
		}
	}

	/// Overwrites every form-mapped field of `record` and rebuilds its address.
	/// Fields outside the form (id, extra server fields) are left alone.
	pub fn apply_to(&self, record: &mut UserRecord) {
		record.name = self.get(Field::Name).to_owned();
		record.username = self.get(Field::Username).to_owned();
		record.email = self.get(Field::Email).to_owned();
		record.address = Some(self.address());
	}

	pub fn into_record(self, id: UserId) -> UserRecord {
		let mut record = UserRecord {
			id,
			..Default::default()
		};
		self.apply_to(&mut record);
		record
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
	Create(FormState),
	Update(UserId, FormState),
}

/// Create/edit dialog flow. Submitting always returns the dialog to `Closed`,
/// whatever the store later makes of the submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Dialog {
	#[default]
	Closed,
	Create(FormState),
	Edit {
		id: UserId,
		form: FormState,
	},
}

impl Dialog {
	pub fn open_create() -> Self {
		Self::Create(FormState::for_create())
	}

	pub fn open_edit(record: &UserRecord) -> Self {
		Self::Edit {
			id: record.id,
			form: FormState::for_edit(record),
		}
	}

	pub fn title(&self) -> &'static str {
		match self {
			Self::Edit { .. } => "Edit User",
			_ => "Add User",
		}
	}

	pub fn form(&self) -> Option<&FormState> {
		match self {
			Self::Closed => None,
			Self::Create(form) | Self::Edit { form, .. } => Some(form),
		}
	}

	pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
		match self {
			Self::Closed => log::warn!(target: "users", "ignoring input for {field:?} while the dialog is closed"),
			Self::Create(form) | Self::Edit { form, .. } => form.set_field(field, value),
		}
	}

	pub fn cancel(&mut self) {
		*self = Self::Closed;
	}

	pub fn take_submission(&mut self) -> Option<Submission> {
		match std::mem::take(self) {
			Self::Closed => None,
			Self::Create(form) => Some(Submission::Create(form)),
			Self::Edit { id, form } => Some(Submission::Update(id, form)),
		}
	}
}
