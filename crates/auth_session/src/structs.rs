//! Session data structures

use serde::{Deserialize, Serialize};

use crate::error::{Result, SessionError};

/// The signed-in user's profile, held in memory and persisted as one record.
///
/// `id` and `email` are fixed at sign-in; the remaining fields can be
/// changed through [`UserUpdate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Student identifier.
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    /// Account email. Never editable.
    pub email: String,

    /// Practicum the student is enrolled in.
    pub practicum: String,

    /// Graduate vs. undergraduate standing.
    pub is_graduate: bool,
}

impl Session {
    /// Check the structural invariant: a session always carries a
    /// non-empty id and email.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(SessionError::InvalidData("empty id".to_string()));
        }
        if self.email.is_empty() {
            return Err(SessionError::InvalidData("empty email".to_string()));
        }
        Ok(())
    }

    /// Shallow-merge an update into this session. Fields absent from the
    /// update are left unchanged; `id` and `email` are not reachable from
    /// [`UserUpdate`] at all.
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(practicum) = update.practicum {
            self.practicum = practicum;
        }
        if let Some(is_graduate) = update.is_graduate {
            self.is_graduate = is_graduate;
        }
    }
}

/// Sign-in input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub student_id: String,
    pub password: String,
}

/// A partial profile edit. Only the mutable session fields appear here,
/// so protected fields cannot be altered through the update path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub practicum: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_graduate: Option<bool>,
}

/// Where the session manager is in its lifecycle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Startup restore has not finished yet; consumers should not render.
    Initializing,

    /// No session; the unauthenticated area is active.
    SignedOut,

    /// A session is set; the authenticated area is active.
    SignedIn,
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Initializing
    }
}

impl SessionPhase {
    /// Whether the startup restore decision has been made.
    pub fn is_ready(&self) -> bool {
        !matches!(self, SessionPhase::Initializing)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionPhase::SignedIn)
    }
}

/// Read-only view published to the UI layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Lifecycle phase.
    pub phase: SessionPhase,

    /// The current session, when signed in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// True while a mutating operation is in flight.
    pub busy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            id: "P12345678".to_string(),
            first_name: "Sam".to_string(),
            last_name: "Smith".to_string(),
            email: "Sam.Smith@saintmartins.edu".to_string(),
            practicum: "Practicum 1".to_string(),
            is_graduate: false,
        }
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let mut session = sample_session();
        session.id = String::new();
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_email() {
        let mut session = sample_session();
        session.email = String::new();
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut session = sample_session();
        session.apply(UserUpdate {
            first_name: Some("New".to_string()),
            ..Default::default()
        });

        assert_eq!(session.first_name, "New");
        assert_eq!(session.last_name, "Smith");
        assert_eq!(session.practicum, "Practicum 1");
    }

    #[test]
    fn test_apply_cannot_touch_id_or_email() {
        // Protected fields are absent from UserUpdate, so even a merge of
        // every field leaves them alone.
        let mut session = sample_session();
        session.apply(UserUpdate {
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
            practicum: Some("Practicum 2".to_string()),
            is_graduate: Some(true),
        });

        assert_eq!(session.id, "P12345678");
        assert_eq!(session.email, "Sam.Smith@saintmartins.edu");
    }

    #[test]
    fn test_serialization_round_trip() {
        let session = sample_session();
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(session, deserialized);
    }

    #[test]
    fn test_default_phase_is_initializing() {
        assert_eq!(SessionPhase::default(), SessionPhase::Initializing);
        assert!(!SessionPhase::Initializing.is_ready());
        assert!(SessionPhase::SignedOut.is_ready());
    }
}
