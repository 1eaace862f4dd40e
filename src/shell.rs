//! Line-oriented event loop around a [`Wizard`].
//!
//! Each input line is parsed into one command, dispatched, and answered with
//! the outcome and a freshly rendered page. End of input ends the session.

use crate::error::Result;
use crate::session::DetailUpdate;
use crate::view::{QuestionnaireView, View};
use crate::wizard::{Action, Outcome, SessionSummary, Wizard};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const WELCOME: &str = "\
Welcome to Talent.io
Thank you for using our recruitment assistant. The application has four steps:
1. Explore Job Offers: browse the available offers and select one.
2. Upload Your Resume: attach your resume and fill in your details.
3. Answer Questions: respond to a few questions about the selected job.
4. Receive Recommendations: see your evaluation and other suitable offers.
Type 'help' for the list of commands.";

pub const HELP: &str = "\
Commands:
  select <title>        pick a job offer
  upload <file name>    attach a resume (.pdf or .docx)
  name <text>           set full name
  email <text>          set email address
  phone <text>          set phone number
  dob <YYYY-MM-DD>      set date of birth
  cover <text>          set cover letter
  next                  continue after uploading
  answer <n|option>     answer the current question
  finish                complete the questionnaire
  recommend <title>     pick a recommended job
  show                  show the current page
  help                  show this help
  quit                  end the session";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("'{command}' needs an argument")]
    MissingArgument { command: String },

    #[error("'{input}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("option {number} does not exist (choose 1 to {count})")]
    OptionOutOfRange { number: usize, count: usize },

    #[error("input line is not valid UTF-8")]
    InvalidEncoding,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    /// `answer <n>`, resolved against the current question's options.
    /// `text` is the argument as typed, for options that are numbers.
    AnswerNumber { number: usize, text: String },
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> std::result::Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let word = word.to_ascii_lowercase();

    let argument = |command: &str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument {
                command: command.to_string(),
            })
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.as_str() {
        "select" => Command::Dispatch(Action::SelectJob(argument("select")?)),
        "upload" => Command::Dispatch(Action::AttachResume(argument("upload")?)),
        "name" => Command::Dispatch(Action::UpdateDetails(DetailUpdate::FullName(argument(
            "name",
        )?))),
        "email" => Command::Dispatch(Action::UpdateDetails(DetailUpdate::Email(argument(
            "email",
        )?))),
        "phone" => Command::Dispatch(Action::UpdateDetails(DetailUpdate::Phone(argument(
            "phone",
        )?))),
        "cover" => Command::Dispatch(Action::UpdateDetails(DetailUpdate::CoverLetter(argument(
            "cover",
        )?))),
        "dob" => {
            let input = argument("dob")?;
            let date = NaiveDate::parse_from_str(&input, "%Y-%m-%d")
                .map_err(|_| ParseError::InvalidDate { input })?;
            Command::Dispatch(Action::UpdateDetails(DetailUpdate::DateOfBirth(date)))
        }
        "next" => Command::Dispatch(Action::ConfirmUpload),
        "answer" => {
            let choice = argument("answer")?;
            match choice.parse::<usize>() {
                Ok(number) => Command::AnswerNumber {
                    number,
                    text: choice,
                },
                Err(_) => Command::Dispatch(Action::Answer(choice)),
            }
        }
        "finish" => Command::Dispatch(Action::Finish),
        "recommend" => Command::Dispatch(Action::SelectRecommendation(argument("recommend")?)),
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(ParseError::UnknownCommand(word)),
    };

    Ok(Some(command))
}

/// Map a 1-based option number onto the option text of the question being
/// shown. A number outside the option list still matches an option spelled
/// exactly like it. Off the questionnaire the text is passed through so the
/// wizard can report why it does not apply.
fn resolve_answer(
    view: &View,
    number: usize,
    text: &str,
) -> std::result::Result<Action, ParseError> {
    match view {
        View::Questionnaire {
            step: QuestionnaireView::Asking { options, .. },
            ..
        } => number
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .or_else(|| options.iter().find(|option| option.as_str() == text))
            .map(|option| Action::Answer(option.clone()))
            .ok_or(ParseError::OptionOutOfRange {
                number,
                count: options.len(),
            }),
        _ => Ok(Action::Answer(text.to_string())),
    }
}

#[derive(Serialize)]
struct Frame<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    view: &'a View,
}

/// Event loop reading commands from `R` and writing pages to `W`.
pub struct Shell<R, W> {
    wizard: Wizard,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(wizard: Wizard, input: R, output: W, json: bool) -> Self {
        Self {
            wizard,
            input,
            output,
            json,
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Run until `quit` or end of input and report how the session went.
    pub fn run(&mut self) -> Result<SessionSummary> {
        if !self.json {
            writeln!(self.output, "{}\n", WELCOME)?;
        }
        self.emit(None, None)?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("input closed");
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.to_string(),
                Err(err) => {
                    warn!(%err, "skipping undecodable input line");
                    self.emit(None, Some(ParseError::InvalidEncoding.to_string()))?;
                    continue;
                }
            };
            if !self.handle_line(&line)? {
                break;
            }
        }

        let summary = self.wizard.summary();
        info!(
            session = %summary.id,
            pages = summary.path.len(),
            answers = summary.responses.len(),
            "session ended"
        );
        if self.json {
            serde_json::to_writer(&mut self.output, &summary)?;
            writeln!(self.output)?;
        } else {
            writeln!(self.output, "Session ended.")?;
        }
        self.output.flush()?;
        Ok(summary)
    }

    /// Handle one line; returns `false` when the session should end.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(true),
            Err(err) => {
                self.emit(None, Some(err.to_string()))?;
                return Ok(true);
            }
        };

        let action = match command {
            Command::Quit => return Ok(false),
            Command::Help => {
                if self.json {
                    serde_json::to_writer(&mut self.output, &serde_json::json!({ "help": HELP }))?;
                    writeln!(self.output)?;
                } else {
                    writeln!(self.output, "{}", HELP)?;
                }
                return Ok(true);
            }
            Command::Show => {
                self.emit(None, None)?;
                return Ok(true);
            }
            Command::AnswerNumber { number, text } => match resolve_answer(
                &self.wizard.view(),
                number,
                &text,
            ) {
                Ok(action) => action,
                Err(err) => {
                    self.emit(None, Some(err.to_string()))?;
                    return Ok(true);
                }
            },
            Command::Dispatch(action) => action,
        };

        let outcome = self.wizard.dispatch(action);
        self.emit(Some(&outcome), None)?;
        Ok(true)
    }

    fn emit(&mut self, outcome: Option<&Outcome>, error: Option<String>) -> Result<()> {
        let view = self.wizard.view();

        if self.json {
            let frame = Frame {
                outcome,
                error,
                view: &view,
            };
            serde_json::to_writer(&mut self.output, &frame)?;
            writeln!(self.output)?;
        } else {
            if let Some(error) = error {
                writeln!(self.output, "error: {} (type 'help' for commands)", error)?;
            }
            for message in outcome.map(Outcome::messages).unwrap_or_default() {
                writeln!(self.output, "! {}", message)?;
            }
            writeln!(self.output, "{}", view)?;
        }
        self.output.flush()?;
        Ok(())
    }
}
