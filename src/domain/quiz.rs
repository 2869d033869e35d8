use crate::error::{KidVestError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::sync::Arc;

/// Points awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Number of options every question offers.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl Question {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct: impl Into<String>,
    ) -> Result<Self> {
        let question = Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct: correct.into(),
        };
        question.validate()?;
        Ok(question)
    }

    fn validate(&self) -> Result<()> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(KidVestError::InvalidQuestionBank(format!(
                "question {:?} has {} options, expected {}",
                self.prompt,
                self.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }
        if !self.options.contains(&self.correct) {
            return Err(KidVestError::InvalidQuestionBank(format!(
                "question {:?} does not offer its correct answer {:?}",
                self.prompt, self.correct
            )));
        }
        Ok(())
    }
}

/// A fixed, non-empty, ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank(Vec<Question>);

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(KidVestError::InvalidQuestionBank(
                "bank has no questions".to_string(),
            ));
        }
        for question in &questions {
            question.validate()?;
        }
        Ok(Self(questions))
    }

    /// Reads a bank from a JSON array of `{prompt, options, correct}` objects.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_reader(reader)?;
        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.0.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        let q = |prompt: &str, options: [&str; 4], correct: &str| Question {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct: correct.to_string(),
        };
        Self(vec![
            q(
                "What is the best way to save money?",
                ["Spend it all", "Save a portion", "Borrow more money", "Ignore savings"],
                "Save a portion",
            ),
            q(
                "Why is it important to save money?",
                ["To buy expensive things", "For financial security", "To impress friends", "No reason"],
                "For financial security",
            ),
            q(
                "What is a good way to track savings?",
                ["Ignore it", "Use a savings app", "Spend first, save later", "Ask a friend"],
                "Use a savings app",
            ),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        *self == Verdict::Correct
    }

    /// Feedback line shown to the child right after answering.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Correct => "Correct! You earned 10 points.",
            Verdict::Incorrect => "Try again!",
        }
    }
}

/// Where the quiz is: which question is up and the score so far.
///
/// There is no finished state; after the last question the quiz starts over.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizState {
    pub questions: Arc<QuestionBank>,
    pub current_index: usize,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Answered {
    pub state: QuizState,
    pub verdict: Verdict,
}

impl Answered {
    pub fn was_correct(&self) -> bool {
        self.verdict.is_correct()
    }
}

impl QuizState {
    pub fn new(questions: Arc<QuestionBank>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
        }
    }

    pub fn current_question(&self) -> &Question {
        // current_index only ever moves modulo len, and banks are never empty.
        &self.questions.0[self.current_index % self.questions.len()]
    }

    /// Scores `answer` against the current question and moves to the next one.
    pub fn submit_answer(&self, answer: &str) -> Answered {
        let verdict = if answer == self.current_question().correct {
            Verdict::Correct
        } else {
            Verdict::Incorrect
        };

        let score = match verdict {
            Verdict::Correct => self.score.saturating_add(POINTS_PER_CORRECT),
            Verdict::Incorrect => self.score,
        };

        let len = self.questions.len();
        Answered {
            state: QuizState {
                questions: Arc::clone(&self.questions),
                current_index: (self.current_index % len + 1) % len,
                score,
            },
            verdict,
        }
    }
}
