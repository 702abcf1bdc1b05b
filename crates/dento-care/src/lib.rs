//! Patient assistant core for the Dento dental clinic: keyword routing of
//! symptoms and questions, the clinic directory, and chat transcripts.

pub mod assistant;
pub mod config;
pub mod conversation;
pub mod directory;
pub mod error;
pub mod telemetry;
