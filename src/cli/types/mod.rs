//! Type-safe wrappers for VDC Fantasy identifiers and CLI filters.

pub mod filters;
pub mod ids;

pub use filters::PlayerFilter;
pub use ids::{MatchId, PlayerId, UserId};
