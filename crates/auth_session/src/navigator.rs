//! Navigation seam

/// Which screen group is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGroup {
    /// The signed-in tab area.
    Authenticated,

    /// The login flow.
    Unauthenticated,
}

/// Switches the visible screen group. Fire-and-forget: the manager never
/// waits on or inspects the outcome of a navigation instruction.
pub trait Navigator: Send + Sync {
    fn replace(&self, group: RouteGroup);
}

/// Navigator that does nothing, for headless use of the manager.
#[derive(Debug, Clone, Default)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn replace(&self, group: RouteGroup) {
        tracing::debug!(?group, "navigation ignored (null navigator)");
    }
}
