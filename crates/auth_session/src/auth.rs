//! Authentication service seam

use async_trait::async_trait;

use crate::error::Result;
use crate::structs::{Credentials, Session};

/// Validates credentials and produces the session to sign in with.
///
/// The manager does not impose any validation policy of its own; whether
/// empty or wrong credentials are rejected is entirely up to the
/// implementation behind this trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session>;
}

/// Stand-in for the real authentication backend: accepts any credentials
/// and fabricates a session from the submitted student id plus fixture
/// profile fields.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderAuthService;

impl PlaceholderAuthService {
    pub fn new() -> Self {
        Self
    }
}

const FALLBACK_STUDENT_ID: &str = "P12345678";

#[async_trait]
impl AuthService for PlaceholderAuthService {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        let id = if credentials.student_id.is_empty() {
            FALLBACK_STUDENT_ID.to_string()
        } else {
            credentials.student_id.clone()
        };

        Ok(Session {
            id,
            first_name: "Sam".to_string(),
            last_name: "Smith".to_string(),
            email: "Sam.Smith@saintmartins.edu".to_string(),
            practicum: "Practicum 1".to_string(),
            is_graduate: false,
        })
    }
}
