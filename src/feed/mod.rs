//! Stat ingestion feed boundary.
//!
//! The feed is an external collaborator: something upstream (the VDC stats
//! scraper) publishes a JSON array of per-player match statistics keyed by
//! player name. This module only fetches and deserializes; scoring and
//! persistence happen in the ingest command.

pub mod http;
pub mod types;

pub use http::{fetch_stat_batch, read_stat_batch_file, resolve_feed_url};
pub use types::RawPlayerStat;
