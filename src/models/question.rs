use serde::Serialize;

use super::{Axis, Genre, Letter};

/// What a question measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum QuestionTag {
    Axis(Axis),
    Category(&'static str),
}

/// Score contribution of choosing an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Counts one answer toward a personality letter
    Letter(Letter),
    /// Adds fixed weights to one or more genres
    Genres(&'static [(Genre, u32)]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub label: &'static str,
    pub effect: Effect,
}

/// A fixed question with its ordered options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub tag: QuestionTag,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Looks up an option by its label
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        let label = label.trim();
        self.options.iter().find(|option| option.label == label)
    }
}

/// One answered question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer<'a> {
    pub question: &'a Question,
    pub option: &'a AnswerOption,
}

/// Ordered answers for one submission, one per question
pub type AnswerSet<'a> = Vec<Answer<'a>>;
