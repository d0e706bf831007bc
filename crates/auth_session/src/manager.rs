//! Session Manager service

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::auth::AuthService;
use crate::error::{Result, SessionError};
use crate::navigator::{Navigator, RouteGroup};
use crate::storage::SessionStore;
use crate::structs::{Credentials, Session, SessionPhase, SessionSnapshot, UserUpdate};

/// Fixed key the session record is stored under.
const SESSION_KEY: &str = "user";

/// Owns the current session and serializes every mutating operation.
///
/// Construct once at process start, call [`initialize`](Self::initialize)
/// to restore any persisted session, then hand the manager to the UI
/// layer. Consumers watch [`subscribe`](Self::subscribe) for state and
/// call the operations; there is at most one session alive at a time.
pub struct SessionManager<S: SessionStore> {
    store: Arc<S>,
    auth: Arc<dyn AuthService>,
    navigator: Arc<dyn Navigator>,
    /// Mutating operations hold this lock across their persistence
    /// awaits. The tokio mutex is fair, so overlapping calls queue FIFO
    /// and merges apply in issuance order.
    current: Mutex<Option<Session>>,
    snapshot_tx: watch::Sender<SessionSnapshot>,
}

impl<S: SessionStore> SessionManager<S> {
    /// Create a manager in the `Initializing` phase.
    pub fn new(store: S, auth: Arc<dyn AuthService>, navigator: Arc<dyn Navigator>) -> Self {
        let (snapshot_tx, _) = watch::channel(SessionSnapshot::default());
        Self {
            store: Arc::new(store),
            auth,
            navigator,
            current: Mutex::new(None),
            snapshot_tx,
        }
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_tx.borrow().clone()
    }

    /// The current session, if signed in.
    pub async fn session(&self) -> Option<Session> {
        self.current.lock().await.clone()
    }

    /// Restore any persisted session and settle into `SignedIn` or
    /// `SignedOut`.
    ///
    /// This is the single suspension point during startup. An absent,
    /// unreadable, or malformed record all land in `SignedOut`; none of
    /// them is surfaced as an error, so schema drift in the stored record
    /// can never wedge startup. Issues exactly one navigation
    /// instruction.
    pub async fn initialize(&self) {
        let mut current = self.current.lock().await;

        match self.restore().await {
            Some(session) => {
                info!(id = %session.id, "restored persisted session");
                *current = Some(session.clone());
                self.publish(SessionPhase::SignedIn, Some(session));
                self.navigator.replace(RouteGroup::Authenticated);
            }
            None => {
                debug!("no persisted session");
                *current = None;
                self.publish(SessionPhase::SignedOut, None);
                self.navigator.replace(RouteGroup::Unauthenticated);
            }
        }
    }

    /// Validate credentials, persist the resulting session, and switch to
    /// the authenticated area.
    ///
    /// The record is written before the in-memory state changes; if the
    /// write fails the manager stays exactly where it was and the error
    /// is returned to the caller.
    pub async fn sign_in(&self, credentials: Credentials) -> Result<Session> {
        let mut current = self.current.lock().await;
        self.set_busy(true);

        let result = self.authenticate_and_persist(&credentials).await;
        match result {
            Ok(session) => {
                info!(id = %session.id, "signed in");
                *current = Some(session.clone());
                self.publish(SessionPhase::SignedIn, Some(session.clone()));
                self.navigator.replace(RouteGroup::Authenticated);
                Ok(session)
            }
            Err(e) => {
                warn!("sign-in failed: {e}");
                self.set_busy(false);
                Err(e)
            }
        }
    }

    /// Delete the persisted record and switch to the unauthenticated
    /// area. Idempotent: with no active session this is a no-op and does
    /// not navigate.
    pub async fn sign_out(&self) -> Result<()> {
        let mut current = self.current.lock().await;

        if current.is_none() {
            debug!("sign-out with no active session is a no-op");
            return Ok(());
        }

        self.set_busy(true);

        match self.store.delete(SESSION_KEY).await {
            Ok(()) => {
                info!("signed out");
                *current = None;
                self.publish(SessionPhase::SignedOut, None);
                self.navigator.replace(RouteGroup::Unauthenticated);
                Ok(())
            }
            Err(e) => {
                warn!("sign-out failed: {e}");
                self.set_busy(false);
                Err(e)
            }
        }
    }

    /// Merge a profile edit into the current session and persist it.
    ///
    /// Fails with [`SessionError::NoSession`] when signed out. Never
    /// navigates.
    pub async fn update_user(&self, update: UserUpdate) -> Result<Session> {
        let mut current = self.current.lock().await;

        let Some(session) = current.as_ref() else {
            return Err(SessionError::NoSession);
        };

        self.set_busy(true);

        let mut merged = session.clone();
        merged.apply(update);

        match self.persist(&merged).await {
            Ok(()) => {
                debug!(id = %merged.id, "session updated");
                *current = Some(merged.clone());
                self.publish(SessionPhase::SignedIn, Some(merged.clone()));
                Ok(merged)
            }
            Err(e) => {
                warn!("session update failed: {e}");
                self.set_busy(false);
                Err(e)
            }
        }
    }

    async fn authenticate_and_persist(&self, credentials: &Credentials) -> Result<Session> {
        let session = self.auth.authenticate(credentials).await?;
        session.validate()?;
        self.persist(&session).await?;
        Ok(session)
    }

    async fn persist(&self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.store.set(SESSION_KEY, &raw).await
    }

    async fn restore(&self) -> Option<Session> {
        let raw = match self.store.get(SESSION_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("failed to read session record, treating as signed out: {e}");
                return None;
            }
        };

        let session: Session = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(e) => {
                warn!("malformed session record, treating as signed out: {e}");
                return None;
            }
        };

        if let Err(e) = session.validate() {
            warn!("invalid session record, treating as signed out: {e}");
            return None;
        }

        Some(session)
    }

    fn publish(&self, phase: SessionPhase, session: Option<Session>) {
        self.snapshot_tx.send_replace(SessionSnapshot {
            phase,
            session,
            busy: false,
        });
    }

    fn set_busy(&self, busy: bool) {
        self.snapshot_tx.send_modify(|snapshot| snapshot.busy = busy);
    }
}
