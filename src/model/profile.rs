use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;

/// A user profile as returned by `getProfile`.
///
/// The backend returns an empty message for unknown users, so every field
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    pub contact_email: String,
    pub first_name: String,
    pub last_name: String,
    /// `"m"` / `"f"` on the wire, empty when the user never set it.
    #[serde(deserialize_with = "gender_from_wire")]
    pub gender: Option<Gender>,
    /// NTRP skill rating, 0.0 when unset.
    pub ntrp: f64,
    pub logged_in: bool,
    pub email_verified: bool,
    /// `[fb_notifications_enabled, email_notifications_enabled]`
    pub notifications: Vec<bool>,
}

impl Profile {
    /// Display name used by the messaging endpoints (`"First Last"`).
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Player gender as encoded on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
pub enum Gender {
    #[serde(rename = "m")]
    #[strum(serialize = "m")]
    Male,
    #[serde(rename = "f")]
    #[strum(serialize = "f")]
    Female,
}

/// Lenient decode: empty or unrecognized strings become `None` rather than
/// failing the whole profile.
fn gender_from_wire<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_camel_case_fields() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "userId": "ann@example.com",
                "firstName": "Ann",
                "lastName": "Lee",
                "gender": "f",
                "ntrp": 4.0,
                "loggedIn": true,
                "emailVerified": true,
                "notifications": [true, false]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.user_id, "ann@example.com");
        assert_eq!(profile.gender, Some(Gender::Female));
        assert_eq!(profile.ntrp, 4.0);
        assert!(profile.logged_in);
        assert_eq!(profile.notifications, vec![true, false]);
    }

    #[test]
    fn test_empty_message_for_unknown_user() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
        assert_eq!(profile.gender, None);
    }

    #[test]
    fn test_unset_gender_is_none() {
        let profile: Profile = serde_json::from_str(r#"{"gender": ""}"#).unwrap();
        assert_eq!(profile.gender, None);
    }

    #[test]
    fn test_full_name() {
        let profile: Profile =
            serde_json::from_str(r#"{"firstName": "Ann", "lastName": "Lee"}"#).unwrap();
        assert_eq!(profile.full_name(), "Ann Lee");
        assert_eq!(Profile::default().full_name(), "");
    }
}
