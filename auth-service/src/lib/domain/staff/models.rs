use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::domain::staff::errors::CredentialsError;

/// Staff member record.
///
/// Holds only the password hash, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMember {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl StaffMember {
    /// Identity claims embedded in this member's session tokens.
    pub fn claims(&self) -> StaffClaims {
        StaffClaims {
            email: self.email.clone(),
            role: self.role,
            staff_id: self.staff_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Job function of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Doctor,
    Nurse,
    HeadNurse,
    CareAssistant,
    Physiotherapist,
    Psychologist,
    SocialWorker,
    Pharmacist,
    Radiographer,
    Janitor,
    CookCleaner,
    Admin,
}

impl Role {
    /// Wire name of the role, as carried in tokens and responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::HeadNurse => "head_nurse",
            Role::CareAssistant => "care_assistant",
            Role::Physiotherapist => "physiotherapist",
            Role::Psychologist => "psychologist",
            Role::SocialWorker => "social_worker",
            Role::Pharmacist => "pharmacist",
            Role::Radiographer => "radiographer",
            Role::Janitor => "janitor",
            Role::CookCleaner => "cook_cleaner",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Private claims of a session token, next to the registered `sub`, `iat` and `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffClaims {
    pub email: String,
    pub role: Role,
    pub staff_id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Decoded session token. The token is the session; nothing is stored server-side.
pub type SessionClaims = auth::Claims<StaffClaims>;

/// Login credentials with both fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create credentials from raw login input.
    ///
    /// No trimming or case folding: the email is matched exactly and the
    /// password is compared byte for byte.
    ///
    /// # Errors
    /// * `MissingEmail` - Email is empty
    /// * `MissingPassword` - Password is empty
    pub fn new(email: String, password: String) -> Result<Self, CredentialsError> {
        if email.is_empty() {
            return Err(CredentialsError::MissingEmail);
        }
        if password.is_empty() {
            return Err(CredentialsError::MissingPassword);
        }
        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub member: StaffMember,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_as_snake_case() {
        assert_eq!(serde_json::to_value(Role::HeadNurse).unwrap(), "head_nurse");
        assert_eq!(serde_json::to_value(Role::CookCleaner).unwrap(), "cook_cleaner");

        let role: Role = serde_json::from_value(serde_json::json!("care_assistant")).unwrap();
        assert_eq!(role, Role::CareAssistant);
        assert_eq!(role.to_string(), "care_assistant");
    }

    #[test]
    fn test_claims_mirror_record() {
        let member = StaffMember {
            id: "user_1001".to_string(),
            email: "anna.virtanen@nursinghome.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            role: Role::Nurse,
            staff_id: "S0001".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Virtanen".to_string(),
        };

        let value = serde_json::to_value(member.claims()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "email": "anna.virtanen@nursinghome.com",
                "role": "nurse",
                "staffId": "S0001",
                "firstName": "Anna",
                "lastName": "Virtanen",
            })
        );
    }

    #[test]
    fn test_credentials_require_both_fields() {
        assert_eq!(
            Credentials::new(String::new(), "nursing123".to_string()),
            Err(CredentialsError::MissingEmail)
        );
        assert_eq!(
            Credentials::new("anna.virtanen@nursinghome.com".to_string(), String::new()),
            Err(CredentialsError::MissingPassword)
        );

        let credentials = Credentials::new(
            "anna.virtanen@nursinghome.com".to_string(),
            "nursing123".to_string(),
        )
        .unwrap();
        assert_eq!(credentials.email(), "anna.virtanen@nursinghome.com");
        assert_eq!(credentials.password(), "nursing123");
    }
}
