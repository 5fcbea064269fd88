//! Wire types for the stat ingestion feed.

use serde::{Deserialize, Serialize};

/// One raw per-player observation as the feed publishes it.
///
/// `mmr` is optional: the combine feed carries it, match-stat feeds do not,
/// and upserts preserve the stored value when it is absent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPlayerStat {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub acs: f64,
    #[serde(default)]
    pub mmr: Option<i64>,
}
