//! User record types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned user identifier.
///
/// The backend may hand out numeric or textual ids; both round-trip unchanged.
/// Textual ids are percent-encoded when placed in a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// A user as stored by the backend and edited by the form.
///
/// All attributes are text at this level; marks are numeric only once validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub email: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub marks1: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub marks2: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub marks3: String,
}

impl UserRecord {
    /// Current value of a form field
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Marks1 => &self.marks1,
            FormField::Marks2 => &self.marks2,
            FormField::Marks3 => &self.marks3,
        }
    }

    /// Shallow-merge a patch: only the fields it carries are overwritten.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(id) = patch.id {
            self.id = Some(id);
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(marks1) = patch.marks1 {
            self.marks1 = marks1;
        }
        if let Some(marks2) = patch.marks2 {
            self.marks2 = marks2;
        }
        if let Some(marks3) = patch.marks3 {
            self.marks3 = marks3;
        }
    }
}

/// Partial update of a [`UserRecord`]; `None` leaves the field untouched.
///
/// Decoding a backend body yields `None` for every key the body leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "present_text_or_number")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_text_or_number")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "present_text_or_number")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "present_text_or_number")]
    pub marks1: Option<String>,
    #[serde(default, deserialize_with = "present_text_or_number")]
    pub marks2: Option<String>,
    #[serde(default, deserialize_with = "present_text_or_number")]
    pub marks3: Option<String>,
}

impl UserPatch {
    /// Patch touching a single form field
    pub fn field(field: FormField, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            FormField::Name => Self { name: value, ..Self::default() },
            FormField::Phone => Self { phone: value, ..Self::default() },
            FormField::Email => Self { email: value, ..Self::default() },
            FormField::Marks1 => Self { marks1: value, ..Self::default() },
            FormField::Marks2 => Self { marks2: value, ..Self::default() },
            FormField::Marks3 => Self { marks3: value, ..Self::default() },
        }
    }
}

impl From<UserRecord> for UserPatch {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: Some(user.name),
            phone: Some(user.phone),
            email: Some(user.email),
            marks1: Some(user.marks1),
            marks2: Some(user.marks2),
            marks3: Some(user.marks3),
        }
    }
}

/// Editable fields of the user form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Marks1,
    Marks2,
    Marks3,
}

impl FormField {
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Marks1,
        Self::Marks2,
        Self::Marks3,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Marks1 => "Marks 1",
            Self::Marks2 => "Marks 2",
            Self::Marks3 => "Marks 3",
        }
    }
}

/// Accept a JSON string, number or null and keep it as text.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Null,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
        Raw::Null => String::new(),
    })
}

/// A key that is present always patches, even when its value is null.
fn present_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    text_or_number(deserializer).map(Some)
}
