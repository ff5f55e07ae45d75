//! Route protection decision

use crate::navigation::Navigation;
use crate::state::SessionState;

/// Outcome of guarding a protected route
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not initialized yet; render neither content nor redirect
    Pending,
    /// Render the protected content
    Allow,
    /// Send the user elsewhere
    Redirect(Navigation),
}

/// Decide what a protected route shows for `state`
pub fn evaluate(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.user.is_some() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Navigation::Login)
    }
}
