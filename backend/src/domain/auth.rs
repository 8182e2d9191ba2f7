//! Authentication primitives: login credentials, registration input and
//! password digests.
//!
//! Inbound payload parsing stays outside the domain; these constructors
//! validate raw strings before a handler talks to a service.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use uuid::Uuid;
use zeroize::Zeroizing;

use super::user::{BannerId, Email, PASSWORD_MIN, PersonName, UserValidationError};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by the login service.
///
/// ## Invariants
/// - `email` is trimmed, lower-cased and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use assessme::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" Ada@Dal.ca ", "password").unwrap();
/// assert_eq!(creds.email(), "ada@dal.ca");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalised = email.trim().to_lowercase();
        if normalised.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email: normalised,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Normalised email used for the user lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Failure while hashing a password.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("password hashing failed: {message}")]
pub struct PasswordHashError {
    message: String,
}

impl From<argon2::password_hash::Error> for PasswordHashError {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Argon2id digest of a user's password, kept in PHC string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    phc: String,
}

impl PasswordDigest {
    /// Digest `password` with a fresh random salt.
    pub fn derive(password: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::encode_b64(Uuid::new_v4().as_bytes())?;
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(Self {
            phc: hash.to_string(),
        })
    }

    /// Check a candidate password against the digest.
    ///
    /// The comparison is constant-time; an unparsable digest never matches.
    pub fn verify(&self, password: &str) -> bool {
        PasswordHash::new(&self.phc).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
    }

    /// Encoded PHC string: algorithm, parameters, salt and hash.
    pub fn as_phc(&self) -> &str {
        self.phc.as_str()
    }
}

/// Raw registration form values.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationParts<'a> {
    /// Banner id, e.g. `B00123456`.
    pub banner_id: &'a str,
    /// First name.
    pub first_name: &'a str,
    /// Last name.
    pub last_name: &'a str,
    /// Login email.
    pub email: &'a str,
    /// Plain-text password.
    pub password: &'a str,
}

/// Validated registration request.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    banner_id: BannerId,
    first_name: PersonName,
    last_name: PersonName,
    email: Email,
    password: Zeroizing<String>,
}

impl UserRegistration {
    /// Validate raw registration values.
    pub fn try_from_parts(parts: RegistrationParts<'_>) -> Result<Self, UserValidationError> {
        let banner_id = BannerId::new(parts.banner_id)?;
        let first_name = PersonName::new(parts.first_name, "firstName")?;
        let last_name = PersonName::new(parts.last_name, "lastName")?;
        let email = Email::new(parts.email)?;
        if parts.password.chars().count() < PASSWORD_MIN {
            return Err(UserValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        Ok(Self {
            banner_id,
            first_name,
            last_name,
            email,
            password: Zeroizing::new(parts.password.to_owned()),
        })
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

    /// Plain-text password, only read to derive the digest.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
