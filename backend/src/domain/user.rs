//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::numeric_id::define_numeric_id;

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was zero or negative.
    #[error("user id must be a positive integer")]
    InvalidId,
    /// Banner ids are `B` followed by eight digits.
    #[error("banner id must be 'B' followed by 8 digits")]
    InvalidBannerId,
    /// A first or last name was blank.
    #[error("{field} must not be empty")]
    EmptyName {
        /// Offending field name.
        field: &'static str,
    },
    /// A first or last name exceeded the maximum length.
    #[error("{field} must be at most {max} characters")]
    NameTooLong {
        /// Offending field name.
        field: &'static str,
        /// Maximum permitted length.
        max: usize,
    },
    /// The email address did not look like `local@domain.tld`.
    #[error("email must be a valid address")]
    InvalidEmail,
    /// The password was shorter than the minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum permitted length.
        min: usize,
    },
    /// The role name is not one of the known roles.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

define_numeric_id! {
    /// Stable numeric user identifier assigned by the user store.
    UserId, UserValidationError, UserValidationError::InvalidId
}

/// Maximum length for first and last names.
pub const NAME_MAX: usize = 64;
/// Minimum password length accepted at registration.
pub const PASSWORD_MIN: usize = 8;

/// University banner identifier, e.g. `B00123456`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BannerId(String);

impl BannerId {
    /// Validate and construct a banner id, normalising the prefix to upper case.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        let mut chars = trimmed.chars();
        let prefix_ok = matches!(chars.next(), Some('B' | 'b'));
        let digits: Vec<char> = chars.collect();
        if !prefix_ok || digits.len() != 8 || !digits.iter().all(char::is_ascii_digit) {
            return Err(UserValidationError::InvalidBannerId);
        }
        let mut normalised = String::with_capacity(9);
        normalised.push('B');
        normalised.extend(digits);
        Ok(Self(normalised))
    }
}

impl AsRef<str> for BannerId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<BannerId> for String {
    fn from(value: BannerId) -> Self {
        value.0
    }
}

impl TryFrom<String> for BannerId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lower-cased email address used as the login identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an email address.
    ///
    /// Only the shape is checked: one `@`, a non-empty local part and a
    /// domain containing a dot that neither starts nor ends the domain.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalised = raw.as_ref().trim().to_lowercase();
        let Some((local, domain)) = normalised.split_once('@') else {
            return Err(UserValidationError::InvalidEmail);
        };
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || !domain_ok || normalised.chars().any(char::is_whitespace) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(normalised))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// First or last name of a person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validate a name, naming `field` in any error.
    pub fn new(raw: impl AsRef<str>, field: &'static str) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName { field });
        }
        if trimmed.chars().count() > NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                field,
                max: NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

/// Role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Course instructor.
    Instructor,
    /// Teaching assistant.
    TeachingAssistant,
    /// Enrolled student.
    Student,
    /// Registered user without course assignments.
    Guest,
}

/// Role assigned to every newly registered user.
pub const DEFAULT_USER_ROLE: Role = Role::Guest;

impl Role {
    /// Wire name of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Instructor => "instructor",
            Self::TeachingAssistant => "teaching_assistant",
            Self::Student => "student",
            Self::Guest => "guest",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "instructor" => Ok(Self::Instructor),
            "teaching_assistant" | "ta" => Ok(Self::TeachingAssistant),
            "student" => Ok(Self::Student),
            "guest" => Ok(Self::Guest),
            other => Err(UserValidationError::UnknownRole(other.to_owned())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application user.
///
/// The password digest never leaves the domain: it is skipped during
/// serialisation and only exposed to the credential check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = i64, example = 5)]
    user_id: UserId,
    #[schema(value_type = String, example = "B00123456")]
    banner_id: BannerId,
    #[schema(value_type = String, example = "Ada")]
    first_name: PersonName,
    #[schema(value_type = String, example = "Lovelace")]
    last_name: PersonName,
    #[schema(value_type = String, example = "ada@dal.ca")]
    email: Email,
    role: Role,
    #[serde(skip)]
    password: super::PasswordDigest,
}

/// Parameter object for [`User::new`].
#[derive(Debug, Clone)]
pub struct UserParts {
    /// Assigned identifier.
    pub user_id: UserId,
    /// Banner id.
    pub banner_id: BannerId,
    /// First name.
    pub first_name: PersonName,
    /// Last name.
    pub last_name: PersonName,
    /// Login email.
    pub email: Email,
    /// Granted role.
    pub role: Role,
    /// Salted password digest.
    pub password: super::PasswordDigest,
}

impl User {
    /// Assemble a user from validated parts.
    pub fn new(parts: UserParts) -> Self {
        let UserParts {
            user_id,
            banner_id,
            first_name,
            last_name,
            email,
            role,
            password,
        } = parts;
        Self {
            user_id,
            banner_id,
            first_name,
            last_name,
            email,
            role,
            password,
        }
    }

    /// Stable identifier.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Banner id.
    pub fn banner_id(&self) -> &BannerId {
        &self.banner_id
    }

    /// First name.
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Last name.
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Login email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Granted role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Stored password digest.
    pub fn password(&self) -> &super::PasswordDigest {
        &self.password
    }
}
