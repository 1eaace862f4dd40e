//! Rule sets checked before an action touches the session.

use crate::enforcement::violations::ViolationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for rule check functions.
pub type ValidationCheck<C> =
    Box<dyn Fn(&C) -> Validation<(), NonEmptyVec<ViolationError>> + Send + Sync>;

/// A set of checks over a context `C`.
/// Uses Validation to accumulate ALL violations.
pub struct EnforcementRules<C> {
    pub(crate) required_checks: Vec<ValidationCheck<C>>,
}

impl<C> EnforcementRules<C> {
    /// Rule set with no checks; always passes.
    pub fn permissive() -> Self {
        Self {
            required_checks: Vec::new(),
        }
    }

    /// Run every check, accumulating ALL violations.
    pub fn enforce(&self, context: &C) -> Validation<(), NonEmptyVec<ViolationError>> {
        let checks: Vec<Validation<(), NonEmptyVec<ViolationError>>> = self
            .required_checks
            .iter()
            .map(|check_fn| check_fn(context))
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Every violation as a plain list; empty when the rules pass.
    pub fn violations(&self, context: &C) -> Vec<ViolationError> {
        match self.enforce(context) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.required_checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required_checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enforcement::builder::EnforcementBuilder;

    struct Form {
        name: String,
        age: u32,
    }

    fn rules() -> EnforcementRules<Form> {
        EnforcementBuilder::new()
            .require_pred(
                |f: &Form| !f.name.is_empty(),
                ViolationError::CustomCheckFailed {
                    message: "name required".to_string(),
                },
            )
            .require_pred(
                |f: &Form| f.age >= 18,
                ViolationError::CustomCheckFailed {
                    message: "too young".to_string(),
                },
            )
            .build()
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let form = Form {
            name: String::new(),
            age: 12,
        };

        match rules().enforce(&form) {
            Validation::Failure(errors) => assert_eq!(errors.len(), 2),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn enforcement_succeeds_when_all_checks_pass() {
        let form = Form {
            name: "Ada".to_string(),
            age: 36,
        };

        assert!(rules().enforce(&form).is_success());
        assert!(rules().violations(&form).is_empty());
    }

    #[test]
    fn violations_keep_check_order() {
        let form = Form {
            name: String::new(),
            age: 40,
        };

        assert_eq!(
            rules().violations(&form),
            vec![ViolationError::CustomCheckFailed {
                message: "name required".to_string()
            }]
        );
    }

    #[test]
    fn custom_validation_check_works() {
        let rules = EnforcementBuilder::new()
            .require(|f: &Form| {
                if f.age < 150 {
                    Validation::success(())
                } else {
                    Validation::fail(ViolationError::CustomCheckFailed {
                        message: "implausible age".to_string(),
                    })
                }
            })
            .build();

        let form = Form {
            name: "Old".to_string(),
            age: 200,
        };
        assert!(rules.enforce(&form).is_failure());
    }

    #[test]
    fn permissive_rules_always_pass() {
        let rules: EnforcementRules<Form> = EnforcementRules::permissive();
        let form = Form {
            name: String::new(),
            age: 0,
        };

        assert!(rules.is_empty());
        assert!(rules.enforce(&form).is_success());
    }
}
