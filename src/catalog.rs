//! Static lookup tables: job postings, question bank and recommendations.
//!
//! A [`Catalog`] is immutable once built. Lookups never fail: an unknown job
//! simply has no posting and no questions.

use crate::error::{Result, WizardError};
use crate::session::SessionState;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// A job tile: title, blurb and an image reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub image: String,
}

impl JobPosting {
    fn new(title: &str, description: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

/// One multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
}

impl Question {
    fn new(text: &str, options: &[&str]) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// On-disk catalog layout. Questions are listed flat and grouped by job in
/// file order.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    jobs: Vec<JobPosting>,
    #[serde(default)]
    recommendations: Vec<JobPosting>,
    #[serde(default)]
    questions: Vec<QuestionEntry>,
}

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    job: String,
    question: String,
    options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    jobs: Vec<JobPosting>,
    questions: HashMap<String, Vec<Question>>,
    recommendations: Vec<JobPosting>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The three postings, two question sets and three recommendations the
    /// wizard ships with. "Product Manager" deliberately has no questions.
    pub fn builtin() -> Self {
        let jobs = vec![
            JobPosting::new(
                "Software Engineer",
                "Develop software, write tests, and collaborate with the team.",
                "images/software_engineer.jpg",
            ),
            JobPosting::new(
                "Data Scientist",
                "Analyze data, build models, and provide insights.",
                "images/data_scientist.jpg",
            ),
            JobPosting::new(
                "Product Manager",
                "Define product vision, work with stakeholders, and lead development.",
                "images/product_manager.jpg",
            ),
        ];

        let mut questions = HashMap::new();
        questions.insert(
            "Software Engineer".to_string(),
            vec![
                Question::new(
                    "Can you describe your experience with Python?",
                    &["Beginner", "Intermediate", "Advanced"],
                ),
                Question::new(
                    "How do you handle tight deadlines?",
                    &["I work extra hours", "I prioritize tasks", "I delegate tasks"],
                ),
                Question::new(
                    "Why are you interested in this position?",
                    &["Passion for technology", "Career growth", "Company reputation"],
                ),
            ],
        );
        questions.insert(
            "Data Scientist".to_string(),
            vec![
                Question::new(
                    "Describe your experience with data analysis tools",
                    &["Excel", "R", "Python"],
                ),
                Question::new(
                    "How do you approach data cleaning?",
                    &["Manually", "Using scripts", "Outsourcing"],
                ),
                Question::new(
                    "What interests you about data science?",
                    &["Data-driven decisions", "Predictive modeling", "Problem-solving"],
                ),
            ],
        );

        let recommendations = vec![
            JobPosting::new(
                "Data Analyst",
                "Analyze data to help organizations make informed decisions.",
                "images/data_analyst.jpg",
            ),
            JobPosting::new(
                "Project Coordinator",
                "Coordinate and manage projects to ensure successful delivery.",
                "images/project_coordinator.jpg",
            ),
            JobPosting::new(
                "UX Designer",
                "Design user-friendly interfaces and improve user experience.",
                "images/ux_designer.jpg",
            ),
        ];

        Self {
            jobs,
            questions,
            recommendations,
        }
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| WizardError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, origin: &Path) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|source| WizardError::CatalogParse {
                path: origin.to_path_buf(),
                source,
            })?;

        ensure_unique("job", &file.jobs)?;
        ensure_unique("recommendation", &file.recommendations)?;

        let mut questions: HashMap<String, Vec<Question>> = HashMap::new();
        for entry in file.questions {
            if entry.options.is_empty() {
                return Err(WizardError::EmptyOptions {
                    job: entry.job,
                    question: entry.question,
                });
            }
            let set = questions.entry(entry.job.clone()).or_default();
            if set.iter().any(|q| q.text == entry.question) {
                return Err(WizardError::DuplicateEntry {
                    kind: "question",
                    title: entry.question,
                });
            }
            set.push(Question {
                text: entry.question,
                options: entry.options,
            });
        }

        for job in questions.keys() {
            if !file.jobs.iter().any(|j| &j.title == job) {
                tracing::warn!(job = %job, "questions listed for a job missing from the catalog");
            }
        }

        tracing::debug!(
            path = %origin.display(),
            jobs = file.jobs.len(),
            question_sets = questions.len(),
            recommendations = file.recommendations.len(),
            "catalog loaded"
        );

        Ok(Self {
            jobs: file.jobs,
            questions,
            recommendations: file.recommendations,
        })
    }

    /// Job postings in catalog order.
    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn job(&self, title: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|j| j.title == title)
    }

    /// Ordered questions for a job; empty when the job has no question set.
    pub fn questions_for(&self, title: &str) -> &[Question] {
        self.questions
            .get(title)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Question set of the session's selected job; empty before a job is
    /// picked.
    pub fn questions_for_session(&self, session: &SessionState) -> &[Question] {
        session
            .selected_job()
            .map(|job| self.questions_for(job))
            .unwrap_or_default()
    }

    /// The question waiting for an answer, if any.
    pub fn current_question(&self, session: &SessionState) -> Option<&Question> {
        self.questions_for_session(session)
            .get(session.question_index)
    }

    pub fn remaining_questions(&self, session: &SessionState) -> usize {
        self.questions_for_session(session)
            .len()
            .saturating_sub(session.question_index)
    }

    /// Recommended postings in list order.
    pub fn recommendations(&self) -> &[JobPosting] {
        &self.recommendations
    }

    pub fn recommendation(&self, title: &str) -> Option<&JobPosting> {
        self.recommendations.iter().find(|j| j.title == title)
    }
}

fn ensure_unique(kind: &'static str, postings: &[JobPosting]) -> Result<()> {
    let mut seen = HashSet::new();
    for posting in postings {
        if !seen.insert(posting.title.as_str()) {
            return Err(WizardError::DuplicateEntry {
                kind,
                title: posting.title.clone(),
            });
        }
    }
    Ok(())
}
