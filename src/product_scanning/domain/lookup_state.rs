use super::ProductLookupResult;
use crate::shared::error::LookupError;

/// Lifecycle of a single lookup.
///
/// Every lookup starts a fresh instance at `Idle`; nothing is shared between
/// lookups. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone)]
pub enum LookupState {
    Idle,
    Requesting,
    Succeeded(ProductLookupResult),
    Failed(LookupError),
}

impl LookupState {
    pub fn new() -> Self {
        LookupState::Idle
    }

    /// `Idle -> Requesting`. Any other state is returned unchanged.
    pub fn start(self) -> Self {
        match self {
            LookupState::Idle => LookupState::Requesting,
            other => other,
        }
    }

    /// `Requesting -> Succeeded | Failed`. Any other state is returned unchanged.
    pub fn complete(self, outcome: Result<ProductLookupResult, LookupError>) -> Self {
        match self {
            LookupState::Requesting => match outcome {
                Ok(result) => LookupState::Succeeded(result),
                Err(error) => LookupState::Failed(error),
            },
            other => other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LookupState::Succeeded(_) | LookupState::Failed(_))
    }
}

impl Default for LookupState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        let state = LookupState::new();
        assert!(matches!(state, LookupState::Idle));

        let state = state.start();
        assert!(matches!(state, LookupState::Requesting));
        assert!(!state.is_terminal());

        let state = state.complete(Ok(ProductLookupResult::not_found("product not found")));
        assert!(matches!(state, LookupState::Succeeded(_)));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_failure_transition() {
        let state = LookupState::new().start().complete(Err(LookupError::Network {
            detail: "unreachable".to_string(),
        }));
        assert!(matches!(state, LookupState::Failed(LookupError::Network { .. })));
    }

    #[test]
    fn test_terminal_state_is_one_shot() {
        let state = LookupState::new()
            .start()
            .complete(Ok(ProductLookupResult::found(None, None, "")));

        let state = state.start().complete(Err(LookupError::Parse {
            detail: "ignored".to_string(),
        }));
        assert!(matches!(state, LookupState::Succeeded(_)));
    }

    #[test]
    fn test_complete_without_start_is_ignored() {
        let state = LookupState::new().complete(Ok(ProductLookupResult::found(None, None, "")));
        assert!(matches!(state, LookupState::Idle));
    }
}
