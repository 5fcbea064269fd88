//! Command implementations for the VDC Fantasy CLI

pub mod common;
pub mod dashboard;
pub mod ingest;
pub mod leaderboard;
pub mod login;
pub mod players;
pub mod roster;
