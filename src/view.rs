//! Rendering the current page.
//!
//! [`render`] is a pure function of the session and catalog: calling it
//! twice on the same state yields equal views. The `Display` impl produces
//! the plain-text page the shell prints; `Serialize` backs `--json` output.

use crate::catalog::{Catalog, JobPosting};
use crate::evaluation::Evaluation;
use crate::page::Page;
use crate::session::{ApplicantDetails, SessionState, UploadedFile};
use serde::Serialize;
use std::fmt;

pub const NO_QUESTIONS_MESSAGE: &str = "No questions available for the selected job.";

const TILES_PER_ROW: usize = 3;

/// Questionnaire completion, clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Progress {
    pub fraction: f64,
    pub percent: u8,
}

impl Progress {
    /// Progress after `answered` of `total` questions. An empty
    /// questionnaire counts as complete.
    pub fn new(answered: usize, total: usize) -> Self {
        let fraction = if total == 0 {
            1.0
        } else {
            (answered as f64 / total as f64).clamp(0.0, 1.0)
        };
        Self {
            fraction,
            percent: (fraction * 100.0).floor() as u8,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Progress: {}%", self.percent)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuestionnaireView {
    NoQuestions {
        message: String,
    },
    Asking {
        number: usize,
        question: String,
        options: Vec<String>,
        progress: Progress,
    },
    ReadyToFinish {
        progress: Progress,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum View {
    JobBoard {
        tiles: Vec<JobPosting>,
    },
    ResumeForm {
        job: Option<String>,
        uploaded_file: Option<UploadedFile>,
        details: ApplicantDetails,
        can_continue: bool,
    },
    Questionnaire {
        job: Option<String>,
        step: QuestionnaireView,
    },
    Evaluation {
        percentage: u8,
        recommendations: Vec<JobPosting>,
    },
}

impl View {
    pub fn page(&self) -> Page {
        match self {
            View::JobBoard { .. } => Page::JobSelection,
            View::ResumeForm { .. } => Page::ResumeUpload,
            View::Questionnaire { .. } => Page::Questionnaire,
            View::Evaluation { .. } => Page::Evaluation,
        }
    }
}

/// Derive the view for the session's current page.
pub fn render(session: &SessionState, catalog: &Catalog) -> View {
    match Page::derive(session) {
        Page::JobSelection => View::JobBoard {
            tiles: catalog.jobs().to_vec(),
        },
        Page::ResumeUpload => View::ResumeForm {
            job: session.selected_job.clone(),
            uploaded_file: session.uploaded_file.clone(),
            details: session.details.clone(),
            can_continue: session.uploaded_file.is_some(),
        },
        Page::Questionnaire => View::Questionnaire {
            job: session.selected_job.clone(),
            step: questionnaire_step(session, catalog),
        },
        Page::Evaluation => {
            let evaluation = Evaluation::for_session(session, catalog);
            View::Evaluation {
                percentage: evaluation.percentage,
                recommendations: evaluation.recommendations,
            }
        }
    }
}

fn questionnaire_step(session: &SessionState, catalog: &Catalog) -> QuestionnaireView {
    let questions = catalog.questions_for_session(session);

    if questions.is_empty() {
        return QuestionnaireView::NoQuestions {
            message: NO_QUESTIONS_MESSAGE.to_string(),
        };
    }

    let progress = Progress::new(session.question_index, questions.len());
    match catalog.current_question(session) {
        Some(question) => QuestionnaireView::Asking {
            number: session.question_index + 1,
            question: question.text.clone(),
            options: question.options.clone(),
            progress,
        },
        None => QuestionnaireView::ReadyToFinish { progress },
    }
}

fn write_tiles(f: &mut fmt::Formatter<'_>, tiles: &[JobPosting]) -> fmt::Result {
    for (row, chunk) in tiles.chunks(TILES_PER_ROW).enumerate() {
        if row > 0 {
            writeln!(f, "{}", "-".repeat(40))?;
        }
        for tile in chunk {
            writeln!(f, "* {}", tile.title)?;
            writeln!(f, "  {}", tile.description)?;
            writeln!(f, "  [{}]", tile.image)?;
        }
    }
    Ok(())
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.page().title())?;
        match self {
            View::JobBoard { tiles } => {
                write_tiles(f, tiles)?;
                writeln!(f, "Choose a job with: select <title>")
            }
            View::ResumeForm {
                job,
                uploaded_file,
                details,
                can_continue,
            } => {
                if let Some(job) = job {
                    writeln!(f, "Applying for: {}", job)?;
                }
                writeln!(f, "Please upload your resume and provide additional details.")?;
                match uploaded_file {
                    Some(file) => writeln!(f, "Uploaded file: {}", file.name)?,
                    None => writeln!(f, "Uploaded file: none (accepted: .pdf, .docx)")?,
                }
                writeln!(f, "Full Name:     {}", or_dash(&details.full_name))?;
                writeln!(f, "Email Address: {}", or_dash(&details.email))?;
                writeln!(f, "Phone Number:  {}", or_dash(&details.phone))?;
                match details.date_of_birth {
                    Some(dob) => writeln!(f, "Date of Birth: {}", dob)?,
                    None => writeln!(f, "Date of Birth: -")?,
                }
                writeln!(f, "Cover Letter:  {}", or_dash(&details.cover_letter))?;
                if *can_continue {
                    writeln!(f, "Continue with: next")
                } else {
                    writeln!(f, "Attach a resume with: upload <file name>")
                }
            }
            View::Questionnaire { step, .. } => {
                writeln!(f, "Answer the following questions one by one.")?;
                match step {
                    QuestionnaireView::NoQuestions { message } => {
                        writeln!(f, "{}", message)?;
                        writeln!(f, "Continue with: finish")
                    }
                    QuestionnaireView::Asking {
                        number,
                        question,
                        options,
                        progress,
                    } => {
                        writeln!(f, "{}", progress)?;
                        writeln!(f, "Question {}: {}", number, question)?;
                        for (i, option) in options.iter().enumerate() {
                            writeln!(f, "  {}) {}", i + 1, option)?;
                        }
                        writeln!(f, "Answer with: answer <number>")
                    }
                    QuestionnaireView::ReadyToFinish { progress } => {
                        writeln!(f, "{}", progress)?;
                        writeln!(f, "All questions answered. Continue with: finish")
                    }
                }
            }
            View::Evaluation {
                percentage,
                recommendations,
            } => {
                writeln!(f, "Evaluation Score: {}%", percentage)?;
                writeln!(f, "### Recommended Job Offers")?;
                write_tiles(f, recommendations)
            }
        }
    }
}
