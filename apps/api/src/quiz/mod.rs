// Aptitude quiz: question bank, scoring, recommendation lookup, session flow.

pub mod analysis;
pub mod bank;
pub mod handlers;
pub mod models;
pub mod recommendation;
pub mod scoring;
pub mod session;
