//! Roster legality checks: team size, MMR cap, and the lock window.
//!
//! Both the interactive draft flow and the final submission path go through
//! these functions; a cap sum computed by a client is never trusted.

use chrono::{DateTime, Utc};

use crate::{config::LeagueRules, PlayerId};


/// A player as the validator sees it: id plus MMR cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub player_id: PlayerId,
    pub mmr: i64,
}

impl Pick {
    pub fn new(player_id: PlayerId, mmr: i64) -> Self {
        Self { player_id, mmr }
    }
}

/// Outcome of toggling a candidate player on a draft in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Candidate added to the roster.
    Accepted,
    /// Candidate was already selected and is toggled off.
    Removed,
    /// Roster already holds the maximum number of players.
    RejectedFull,
    /// Adding the candidate would push the MMR sum past the cap.
    RejectedOverCap,
    /// The lock deadline has passed; no mutation is permitted.
    RejectedLocked,
}

/// Outcome of submitting a finished roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Accepted,
    /// A roster must have exactly `roster_size` members; partial drafts are
    /// editable but not submittable.
    RejectedIncompleteSize,
    RejectedLocked,
}

/// Sum of MMR across the current picks.
pub fn mmr_total(current: &[Pick]) -> i64 {
    current.iter().map(|p| p.mmr).sum()
}

/// Validate toggling `candidate` against the current draft state.
///
/// Checks run in a fixed order: lock window, toggle-off, team size, MMR
/// cap. Removal never needs cap or size checks.
pub fn validate_selection(
    current: &[Pick],
    candidate: Pick,
    rules: &LeagueRules,
    now: DateTime<Utc>,
) -> Selection {
    if rules.is_locked(now) {
        return Selection::RejectedLocked;
    }
    if current.iter().any(|p| p.player_id == candidate.player_id) {
        return Selection::Removed;
    }
    if current.len() >= rules.roster_size {
        return Selection::RejectedFull;
    }
    if mmr_total(current) + candidate.mmr > rules.mmr_cap {
        return Selection::RejectedOverCap;
    }
    Selection::Accepted
}

/// Validate a roster of `roster_len` members for submission.
pub fn validate_submission(
    roster_len: usize,
    rules: &LeagueRules,
    now: DateTime<Utc>,
) -> Submission {
    if rules.is_locked(now) {
        return Submission::RejectedLocked;
    }
    if roster_len != rules.roster_size {
        return Submission::RejectedIncompleteSize;
    }
    Submission::Accepted
}

/// Replay a full id set through [`validate_selection`], accumulating picks
/// one at a time.
///
/// Returns the draft state on success, or the first rejection encountered.
/// This is what the submission path uses so selection and submission share
/// one authoritative rule set.
pub fn replay_selections(
    picks: &[Pick],
    rules: &LeagueRules,
    now: DateTime<Utc>,
) -> std::result::Result<Vec<Pick>, Selection> {
    let mut current: Vec<Pick> = Vec::with_capacity(picks.len());
    for &pick in picks {
        match validate_selection(&current, pick, rules, now) {
            Selection::Accepted => current.push(pick),
            // Removed means the input held a duplicate id; callers collapse
            // ids to a set first, so any non-accept is a rejection here.
            other => return Err(other),
        }
    }
    Ok(current)
}
