//! Builder API for creating rule sets.

use crate::enforcement::rules::{EnforcementRules, ValidationCheck};
use crate::enforcement::violations::ViolationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for creating enforcement rules
pub struct EnforcementBuilder<C> {
    required_checks: Vec<ValidationCheck<C>>,
}

impl<C> EnforcementBuilder<C> {
    pub fn new() -> Self {
        Self {
            required_checks: Vec::new(),
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&C) -> Validation<(), NonEmptyVec<ViolationError>> + Send + Sync + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a predicate check that reports `violation` when it fails
    pub fn require_pred<F>(mut self, predicate: F, violation: ViolationError) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &C| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(violation.clone())
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    /// Build the enforcement rules
    pub fn build(self) -> EnforcementRules<C> {
        EnforcementRules {
            required_checks: self.required_checks,
        }
    }
}

impl<C> Default for EnforcementBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
