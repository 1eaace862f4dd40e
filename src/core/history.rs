//! Page transition history.
//!
//! Every page change a session goes through is kept as an immutable record,
//! so a finished session can report the path it took and which action moved
//! it along.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single page transition.
///
/// # Example
///
/// ```rust
/// use talent_wizard::core::StateTransition;
/// use talent_wizard::Page;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Page::JobSelection,
///     to: Page::ResumeUpload,
///     timestamp: Utc::now(),
///     trigger: "select_job".to_string(),
/// };
/// assert_eq!(transition.trigger, "select_job");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Name of the action that opened the gate
    pub trigger: String,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use talent_wizard::core::{StateHistory, StateTransition};
/// use talent_wizard::Page;
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: Page::JobSelection,
///     to: Page::ResumeUpload,
///     timestamp: Utc::now(),
///     trigger: "select_job".to_string(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Page::JobSelection, &Page::ResumeUpload]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// The first entry is the source of the first transition, followed by
    /// the target of every transition in order. Empty when nothing was
    /// recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestPage {
        Pick,
        Upload,
        Quiz,
        Score,
    }

    impl State for TestPage {
        fn name(&self) -> &str {
            match self {
                Self::Pick => "Pick",
                Self::Upload => "Upload",
                Self::Quiz => "Quiz",
                Self::Score => "Score",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Score)
        }
    }

    fn transition(from: TestPage, to: TestPage, trigger: &str) -> StateTransition<TestPage> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            trigger: trigger.to_string(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestPage> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(TestPage::Pick, TestPage::Upload, "pick"));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_page_sequence() {
        let history = StateHistory::new()
            .record(transition(TestPage::Pick, TestPage::Upload, "pick"))
            .record(transition(TestPage::Upload, TestPage::Quiz, "confirm"))
            .record(transition(TestPage::Quiz, TestPage::Score, "finish"));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &TestPage::Pick,
                &TestPage::Upload,
                &TestPage::Quiz,
                &TestPage::Score
            ]
        );
    }

    #[test]
    fn last_returns_latest_trigger() {
        let history = StateHistory::new()
            .record(transition(TestPage::Pick, TestPage::Upload, "pick"))
            .record(transition(TestPage::Upload, TestPage::Quiz, "confirm"));

        assert_eq!(history.last().unwrap().trigger, "confirm");
    }

    #[test]
    fn single_transition_has_zero_duration() {
        let history =
            StateHistory::new().record(transition(TestPage::Pick, TestPage::Upload, "pick"));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: TestPage::Pick,
                to: TestPage::Upload,
                timestamp: start,
                trigger: "pick".to_string(),
            })
            .record(StateTransition {
                from: TestPage::Upload,
                to: TestPage::Quiz,
                timestamp: start + chrono::Duration::seconds(3),
                trigger: "confirm".to_string(),
            });

        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            StateHistory::new().record(transition(TestPage::Pick, TestPage::Upload, "pick"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestPage> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].trigger, "pick");
    }
}
