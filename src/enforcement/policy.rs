//! The rule set each wizard action must satisfy.

use crate::enforcement::builder::EnforcementBuilder;
use crate::enforcement::context::ActionContext;
use crate::enforcement::rules::EnforcementRules;
use crate::enforcement::violations::ViolationError;
use crate::session::DocumentKind;
use crate::wizard::Action;
use stillwater::validation::Validation;

/// Rules checked before `action` is applied. Page membership is checked by
/// the wizard beforehand, so these only look at payload and session data.
pub fn rules_for<'a>(action: &Action) -> EnforcementRules<ActionContext<'a>> {
    match action {
        Action::SelectJob(title) => {
            let wanted = title.clone();
            EnforcementBuilder::new()
                .require_pred(
                    move |ctx: &ActionContext<'a>| ctx.catalog.job(&wanted).is_some(),
                    ViolationError::UnknownJob {
                        title: title.clone(),
                    },
                )
                .build()
        }
        Action::AttachResume(name) => {
            let trimmed = name.trim().to_string();
            let has_name = !trimmed.is_empty();
            let supported = DocumentKind::from_file_name(&trimmed).is_some();
            EnforcementBuilder::new()
                .require_pred(move |_: &ActionContext<'a>| has_name, ViolationError::EmptyFileName)
                .require_pred(
                    move |_: &ActionContext<'a>| supported,
                    ViolationError::UnsupportedFile { name: trimmed },
                )
                .build()
        }
        Action::UpdateDetails(_) => EnforcementRules::permissive(),
        Action::ConfirmUpload => EnforcementBuilder::new()
            .require_pred(
                |ctx: &ActionContext<'a>| ctx.session.uploaded_file.is_some(),
                ViolationError::NoFileAttached,
            )
            .build(),
        Action::Answer(option) => {
            let option = option.clone();
            EnforcementBuilder::new()
                .require(move |ctx: &ActionContext<'a>| match ctx.current_question() {
                    None => Validation::fail(ViolationError::NoCurrentQuestion),
                    Some(question) if question.has_option(&option) => Validation::success(()),
                    Some(question) => Validation::fail(ViolationError::InvalidOption {
                        option: option.clone(),
                        question: question.text.clone(),
                    }),
                })
                .build()
        }
        Action::Finish => EnforcementBuilder::new()
            .require(|ctx: &ActionContext<'a>| match ctx.remaining_questions() {
                0 => Validation::success(()),
                remaining => Validation::fail(ViolationError::QuestionsRemaining { remaining }),
            })
            .build(),
        Action::SelectRecommendation(title) => {
            let wanted = title.clone();
            EnforcementBuilder::new()
                .require_pred(
                    move |ctx: &ActionContext<'a>| ctx.catalog.recommendation(&wanted).is_some(),
                    ViolationError::UnknownRecommendation {
                        title: title.clone(),
                    },
                )
                .build()
        }
    }
}
