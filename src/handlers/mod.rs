pub mod auth;
pub mod chat;
pub mod health;
pub mod history;
pub mod journey;
pub mod mood_entries;
pub mod profile;
pub mod quiz;
