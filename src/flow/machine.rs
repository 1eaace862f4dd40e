//! Synchronous flow machine that follows gates over a context.

use crate::core::{State, StateHistory, StateTransition};
use crate::flow::transition::{Transition, TransitionError};
use chrono::Utc;

/// Result of evaluating a single step.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult<S: State> {
    /// A gate is open; the machine should move to this state
    Transitioned(S),

    /// Outgoing transitions exist but every gate is closed
    Blocked,

    /// The current state is final
    Settled,
}

/// State machine whose transitions fire when their gate passes against a
/// context value.
///
/// The machine never owns the context: callers mutate it, then call
/// [`StateMachine::sync`] to let the machine catch up.
pub struct StateMachine<S: State, C> {
    current: S,
    transitions: Vec<Transition<S, C>>,
    history: StateHistory<S>,
}

impl<S: State, C> StateMachine<S, C> {
    /// Create a new state machine in the initial state
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            transitions: Vec::new(),
            history: StateHistory::new(),
        }
    }

    pub fn add_transition(&mut self, transition: Transition<S, C>) {
        self.transitions.push(transition);
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Evaluate one step against `context` without changing the machine.
    /// Call [`StateMachine::apply_result`] to commit the outcome.
    pub fn step(&self, context: &C) -> Result<StepResult<S>, TransitionError> {
        if self.current.is_final() {
            return Ok(StepResult::Settled);
        }

        let mut outgoing = self
            .transitions
            .iter()
            .filter(|t| t.from == self.current)
            .peekable();

        if outgoing.peek().is_none() {
            return Err(TransitionError::NoTransition {
                from: self.current.name().to_string(),
            });
        }

        Ok(outgoing
            .find(|t| t.can_execute(&self.current, context))
            .map(|t| StepResult::Transitioned(t.to.clone()))
            .unwrap_or(StepResult::Blocked))
    }

    /// Apply the result from `step()`, recording `trigger` on any transition.
    pub fn apply_result(&mut self, result: StepResult<S>, trigger: &str) {
        if let StepResult::Transitioned(new_state) = result {
            let record = StateTransition {
                from: self.current.clone(),
                to: new_state.clone(),
                timestamp: Utc::now(),
                trigger: trigger.to_string(),
            };
            self.history = self.history.record(record);
            self.current = new_state;
        }
    }

    /// Step repeatedly until no gate is open, returning every state entered.
    ///
    /// A flow with `n` transitions settles within `n` steps unless it
    /// contains a cycle of open gates, which is reported as
    /// [`TransitionError::Unsettled`].
    pub fn sync(&mut self, context: &C, trigger: &str) -> Result<Vec<S>, TransitionError> {
        let start = self.current.name().to_string();
        let limit = self.transitions.len();
        let mut entered = Vec::new();

        loop {
            match self.step(context)? {
                StepResult::Transitioned(next) => {
                    if entered.len() == limit {
                        return Err(TransitionError::Unsettled {
                            from: start,
                            steps: limit,
                        });
                    }
                    entered.push(next.clone());
                    self.apply_result(StepResult::Transitioned(next), trigger);
                }
                StepResult::Blocked | StepResult::Settled => return Ok(entered),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Stage {
        Draft,
        Review,
        Published,
    }

    impl State for Stage {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Review => "Review",
                Self::Published => "Published",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Published)
        }
    }

    #[derive(Default)]
    struct Doc {
        submitted: bool,
        approved: bool,
    }

    fn machine() -> StateMachine<Stage, Doc> {
        let mut machine = StateMachine::new(Stage::Draft);
        machine.add_transition(Transition {
            from: Stage::Draft,
            to: Stage::Review,
            gate: Some(Guard::new(|d: &Doc| d.submitted)),
        });
        machine.add_transition(Transition {
            from: Stage::Review,
            to: Stage::Published,
            gate: Some(Guard::new(|d: &Doc| d.approved)),
        });
        machine
    }

    #[test]
    fn closed_gate_blocks_step() {
        let machine = machine();
        let result = machine.step(&Doc::default()).unwrap();

        assert_eq!(result, StepResult::Blocked);
        assert_eq!(machine.current_state(), &Stage::Draft);
    }

    #[test]
    fn step_does_not_mutate_until_applied() {
        let mut machine = machine();
        let doc = Doc {
            submitted: true,
            ..Doc::default()
        };

        let result = machine.step(&doc).unwrap();
        assert_eq!(result, StepResult::Transitioned(Stage::Review));
        assert_eq!(machine.current_state(), &Stage::Draft);

        machine.apply_result(result, "submit");
        assert_eq!(machine.current_state(), &Stage::Review);
        assert_eq!(machine.history().transitions().len(), 1);
        assert_eq!(machine.history().transitions()[0].trigger, "submit");
    }

    #[test]
    fn sync_follows_every_open_gate() {
        let mut machine = machine();
        let doc = Doc {
            submitted: true,
            approved: true,
        };

        let entered = machine.sync(&doc, "bulk").unwrap();

        assert_eq!(entered, vec![Stage::Review, Stage::Published]);
        assert!(machine.is_final());
        assert_eq!(
            machine.history().get_path(),
            vec![&Stage::Draft, &Stage::Review, &Stage::Published]
        );
    }

    #[test]
    fn sync_stops_at_closed_gate() {
        let mut machine = machine();
        let doc = Doc {
            submitted: true,
            approved: false,
        };

        let entered = machine.sync(&doc, "submit").unwrap();

        assert_eq!(entered, vec![Stage::Review]);
        assert_eq!(machine.current_state(), &Stage::Review);
    }

    #[test]
    fn final_state_is_settled() {
        let mut machine = machine();
        machine
            .sync(
                &Doc {
                    submitted: true,
                    approved: true,
                },
                "bulk",
            )
            .unwrap();

        assert_eq!(machine.step(&Doc::default()).unwrap(), StepResult::Settled);
        assert!(machine.sync(&Doc::default(), "again").unwrap().is_empty());
    }

    #[test]
    fn dead_end_reports_no_transition() {
        let machine: StateMachine<Stage, Doc> = StateMachine::new(Stage::Review);
        let result = machine.step(&Doc::default());

        assert!(matches!(
            result,
            Err(TransitionError::NoTransition { from }) if from == "Review"
        ));
    }

    #[test]
    fn open_cycle_is_unsettled() {
        let mut machine: StateMachine<Stage, ()> = StateMachine::new(Stage::Draft);
        machine.add_transition(Transition {
            from: Stage::Draft,
            to: Stage::Review,
            gate: None,
        });
        machine.add_transition(Transition {
            from: Stage::Review,
            to: Stage::Draft,
            gate: None,
        });

        let result = machine.sync(&(), "loop");
        assert!(matches!(result, Err(TransitionError::Unsettled { steps: 2, .. })));
    }
}
