//! Document lifecycle.

/// `document.readyState`, as reported by the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Unknown values are treated as `Interactive`: parsed, not yet loaded.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "loading" => Self::Loading,
            "complete" => Self::Complete,
            _ => Self::Interactive,
        }
    }

    /// Whether init has to wait for `DOMContentLoaded`.
    pub fn awaits_dom(self) -> bool {
        self == Self::Loading
    }

    /// Whether `load` has already fired.
    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_strings() {
        assert!(ReadyState::parse("loading").awaits_dom());
        assert!(!ReadyState::parse("interactive").awaits_dom());
        assert!(!ReadyState::parse("interactive").is_complete());
        assert!(ReadyState::parse("complete").is_complete());
        assert!(!ReadyState::parse("complete").awaits_dom());
        assert_eq!(ReadyState::parse("prerender"), ReadyState::Interactive);
    }
}
