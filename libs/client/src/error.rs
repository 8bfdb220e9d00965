use crate::locale::{ClientAction, Locale};
use crate::transport::TransportError;
use thiserror::Error;

/// A failed client operation. Local state is never mutated before the
/// transport call succeeds, so carrying the action is enough context to
/// notify the user.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ClientError {
    pub action: ClientAction,
    #[source]
    pub source: TransportError,
}

impl ClientError {
    pub(crate) fn new(action: ClientAction, source: TransportError) -> Self {
        Self { action, source }
    }

    /// User-facing notification text naming the failed action.
    pub fn user_message(&self, locale: &Locale) -> &'static str {
        locale.action_failed(self.action)
    }
}
