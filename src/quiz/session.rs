//! Transient quiz-taking session
//!
//! Holds the answer state for one play-through of a quiz. Never
//! persisted; the caller folds the final outcome into cumulative stats
//! through the store.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::models::{Quiz, QuizOutcome, QuizQuestion};

pub struct QuizSession {
    quiz: Quiz,
    current_index: usize,
    answers: HashMap<String, String>,
    score: u32,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            current_index: 0,
            answers: HashMap::new(),
            score: 0,
            started_at: Utc::now(),
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// The question awaiting an answer, or None once the quiz is done
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.quiz.questions.get(self.current_index)
    }

    /// 1-based number of the current question, for display
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.questions.len()
    }

    /// Record an answer for the current question and advance.
    ///
    /// Answers are compared verbatim against the question's correct
    /// answer. Returns whether the answer was correct, or None when the
    /// quiz is already complete.
    pub fn answer(&mut self, text: &str) -> Option<bool> {
        let question = self.quiz.questions.get(self.current_index)?;
        let correct = text == question.correct_answer;
        self.answers.insert(question.id.clone(), text.to_string());
        if correct {
            self.score += 1;
        }
        self.current_index += 1;
        Some(correct)
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.quiz.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Outcome record for folding into cumulative stats
    pub fn outcome(&self) -> QuizOutcome {
        let elapsed = Utc::now().signed_duration_since(self.started_at);
        QuizOutcome {
            quiz_id: self.quiz.id.clone(),
            correct_answers: self.score,
            total_questions: self.quiz.questions.len() as u32,
            time_spent_secs: elapsed.num_seconds().max(0) as u64,
            difficulty: self.quiz.difficulty,
        }
    }
}
