//! Single-user quiz flow: answer the current question, advance, score on completion.
//!
//! This mirrors the interactive quiz the client drives one question at a time.
//! The HTTP surface only receives the finished `AnswerSet`, so the state machine
//! is exercised by its tests and kept in step with `score_answers`.
#![allow(dead_code)]

use crate::quiz::bank::QuestionBank;
use crate::quiz::models::AnswerSet;
use crate::quiz::scoring::{score_answers, QuizScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress(usize),
    Completed,
}

#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    bank: &'a QuestionBank,
    answers: AnswerSet,
    state: QuizState,
    score: Option<QuizScore>,
}

impl<'a> QuizSession<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self {
            bank,
            answers: AnswerSet::new(),
            state: QuizState::InProgress(0),
            score: None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Score computed when the session completed.
    pub fn score(&self) -> Option<&QuizScore> {
        self.score.as_ref()
    }

    /// Records a choice for the current question without advancing.
    /// Ignored once the session is completed.
    pub fn answer(&mut self, option: i64) {
        if let QuizState::InProgress(current) = self.state {
            self.answers.record(current, option);
        }
    }

    /// Moves to the next question, or completes and scores after the last one.
    pub fn advance(&mut self) -> QuizState {
        if let QuizState::InProgress(current) = self.state {
            if current + 1 < self.bank.len() {
                self.state = QuizState::InProgress(current + 1);
            } else {
                self.score = Some(score_answers(&self.answers, self.bank));
                self.state = QuizState::Completed;
            }
        }
        self.state
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.score = None;
        self.state = QuizState::InProgress(0);
    }

    /// Completion percentage shown alongside the current question (1-based).
    pub fn progress_percent(&self) -> u8 {
        match self.state {
            QuizState::Completed => 100,
            QuizState::InProgress(_) if self.bank.is_empty() => 0,
            QuizState::InProgress(current) => {
                (((current + 1) as f64 / self.bank.len() as f64) * 100.0).round() as u8
            }
        }
    }
}
