//! Mood engine. Everything except `chat` is pure and synchronous.

pub mod chat;
pub mod classifier;
pub mod history;
pub mod journey;
pub mod lexicon;
pub mod quiz;
pub mod score;
