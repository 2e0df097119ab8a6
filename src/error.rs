//! Error types shared across the component tree.
//!
//! Load failures never escape a screen: they are folded into the screen's
//! `Error` state. Navigation errors are returned to the caller, which decides
//! whether an empty-stack pop means "exit" or "ignore".

use thiserror::Error;

/// A collaborator call (data fetch or persistence) failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{0}")]
    Network(String),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// The conference exists but does not publish this kind of data.
    #[error("{0} not available")]
    Unavailable(&'static str),

    #[error("failed to decode conference data: {0}")]
    Decode(String),
}

impl LoadError {
    pub fn network_unavailable() -> Self {
        LoadError::Network("network unavailable".to_string())
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        LoadError::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Navigation and component contract failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// Popping (or replacing with nothing) would leave the stack empty.
    #[error("navigation stack must keep at least one entry")]
    EmptyStack,

    /// A destroyed component was asked to navigate, observe or launch work.
    #[error("component '{component}' used after its lifecycle was destroyed")]
    LifecycleViolation { component: String },
}

impl NavError {
    pub fn violation(component: impl Into<String>) -> Self {
        NavError::LifecycleViolation {
            component: component.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_unavailable_message_is_human_readable() {
        assert_eq!(
            LoadError::network_unavailable().to_string(),
            "network unavailable"
        );
    }

    #[test]
    fn not_found_names_kind_and_id() {
        let err = LoadError::not_found("session", "s-42");
        assert_eq!(err.to_string(), "session 's-42' not found");
    }

    #[test]
    fn unavailable_reads_as_sentence() {
        assert_eq!(
            LoadError::Unavailable("venue").to_string(),
            "venue not available"
        );
    }

    #[test]
    fn violation_names_component() {
        let err = NavError::violation("home");
        assert_eq!(
            err.to_string(),
            "component 'home' used after its lifecycle was destroyed"
        );
    }
}
