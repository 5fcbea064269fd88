//! League configuration: roster constraints and the global lock window.

use chrono::{DateTime, Utc};

use crate::{error::Result, LOCK_AT_ENV_VAR};

/// Roster size required for a complete fantasy team.
pub const ROSTER_SIZE: usize = 5;

/// Maximum combined MMR across a roster's five players.
pub const MMR_CAP: i64 = 1500;

/// Default lock deadline: after this instant all roster mutations are
/// rejected. Overridable per run via `--lock-deadline` or the
/// `VDC_FANTASY_LOCK_AT` env var.
pub const DEFAULT_LOCK_AT: &str = "2025-05-27T23:59:59Z";

/// League rules passed into the team validator.
///
/// Modeled as an injected value rather than process-wide constants so both
/// sides of the lock boundary are reachable from tests.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueRules {
    pub roster_size: usize,
    pub mmr_cap: i64,
    pub lock_deadline: DateTime<Utc>,
}

impl LeagueRules {
    /// Resolve rules for one command invocation.
    ///
    /// Lock-deadline resolution order: explicit flag, `VDC_FANTASY_LOCK_AT`,
    /// then the built-in default. Timestamps are RFC 3339.
    pub fn resolve(lock_deadline: Option<&str>) -> Result<Self> {
        let raw = match lock_deadline {
            Some(s) => s.to_string(),
            None => std::env::var(LOCK_AT_ENV_VAR).unwrap_or_else(|_| DEFAULT_LOCK_AT.to_string()),
        };
        let lock_deadline = DateTime::parse_from_rfc3339(&raw)?.with_timezone(&Utc);

        Ok(Self {
            roster_size: ROSTER_SIZE,
            mmr_cap: MMR_CAP,
            lock_deadline,
        })
    }

    /// True once the lock deadline has passed.
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        now > self.lock_deadline
    }
}

impl Default for LeagueRules {
    fn default() -> Self {
        Self {
            roster_size: ROSTER_SIZE,
            mmr_cap: MMR_CAP,
            lock_deadline: DateTime::parse_from_rfc3339(DEFAULT_LOCK_AT)
                .expect("default lock deadline is valid RFC 3339")
                .with_timezone(&Utc),
        }
    }
}
