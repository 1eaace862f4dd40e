//! Core State trait for wizard pages.
//!
//! Every page enum driven by the flow machine implements this trait, which
//! exposes pure methods for inspecting where a session currently stands.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. A state is an immutable value describing the
/// position of a session in a linear flow.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition history
/// - `PartialEq`: transitions match on their source state
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: states are emitted as part of JSON views
///
/// # Example
///
/// ```rust
/// use talent_wizard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Step {
///     Intro,
///     Form,
///     Done,
/// }
///
/// impl State for Step {
///     fn name(&self) -> &str {
///         match self {
///             Self::Intro => "Intro",
///             Self::Form => "Form",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// assert!(Step::Done.is_final());
/// assert_eq!(Step::Form.name(), "Form");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// No transition leaves a final state. Default implementation returns
    /// `false`.
    fn is_final(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestPage {
        Start,
        Form,
        Summary,
    }

    impl State for TestPage {
        fn name(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Form => "Form",
                Self::Summary => "Summary",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Summary)
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestPage::Start.name(), "Start");
        assert_eq!(TestPage::Form.name(), "Form");
        assert_eq!(TestPage::Summary.name(), "Summary");
    }

    #[test]
    fn is_final_identifies_terminal_pages() {
        assert!(!TestPage::Start.is_final());
        assert!(!TestPage::Form.is_final());
        assert!(TestPage::Summary.is_final());
    }

    #[test]
    fn state_serializes_correctly() {
        let page = TestPage::Form;
        let json = serde_json::to_string(&page).unwrap();
        let deserialized: TestPage = serde_json::from_str(&json).unwrap();
        assert_eq!(page, deserialized);
    }
}
