//! # Detail Enrichment
//!
//! A client's detail view carries a short list of exercise suggestions. They
//! come from the Wger exercise API (reached through a relay, see
//! [`remote`]), and when that fails for any reason from the built-in
//! [`fallback`] table keyed by the client's goal.
//!
//! Per view the panel moves `Loading -> Success | Fallback` exactly once:
//!
//! - one fetch, no retries, nothing cached between views
//! - any transport error, non-2xx status, empty or malformed payload means
//!   `Fallback`
//! - a fallback panel shows only table entries, never a partial remote list

use crate::model::ExerciseSuggestion;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{info, warn};

pub mod fallback;
pub mod remote;

pub const DESCRIPTION_LIMIT: usize = 100;
pub const NO_DESCRIPTION: &str = "No description available.";
pub const LOADING_PLACEHOLDER: &str = "Loading exercises from Wger API...";

static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[^>]+(>|$)").expect("tag regex should compile"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("unexpected payload: {0}")]
    Malformed(String),

    #[error("no exercises found")]
    Empty,

    #[error("remote lookups are disabled")]
    Disabled,
}

/// Anything that can produce exercise suggestions for the detail view.
pub trait ExerciseSource {
    fn fetch(&self) -> Result<Vec<ExerciseSuggestion>, FetchError>;
}

/// A source that never reaches the network. Used for `--offline`.
pub struct OfflineSource;

impl ExerciseSource for OfflineSource {
    fn fetch(&self) -> Result<Vec<ExerciseSuggestion>, FetchError> {
        Err(FetchError::Disabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enrichment {
    Loading,
    Success(Vec<ExerciseSuggestion>),
    Fallback {
        /// Fallback table key that was used.
        goal: String,
        suggestions: Vec<ExerciseSuggestion>,
        reason: FetchError,
    },
}

impl Enrichment {
    pub fn suggestions(&self) -> &[ExerciseSuggestion] {
        match self {
            Enrichment::Loading => &[],
            Enrichment::Success(items) => items,
            Enrichment::Fallback { suggestions, .. } => suggestions,
        }
    }

    /// Informational line shown under the panel.
    pub fn note(&self) -> String {
        match self {
            Enrichment::Loading => LOADING_PLACEHOLDER.to_string(),
            Enrichment::Success(items) => format!(
                "Fetched {} exercises from the Wger Workout Manager API",
                items.len()
            ),
            Enrichment::Fallback { goal, .. } => {
                format!("Exercise API unavailable, showing built-in {} exercises", goal)
            }
        }
    }
}

/// Resolves the panel for a client with the given goal. Calls `source` once.
pub fn enrich<E: ExerciseSource + ?Sized>(source: &E, goal: &str) -> Enrichment {
    match source.fetch() {
        Ok(items) if !items.is_empty() => Enrichment::Success(items),
        Ok(_) => fall_back(goal, FetchError::Empty),
        Err(reason) => fall_back(goal, reason),
    }
}

fn fall_back(goal: &str, reason: FetchError) -> Enrichment {
    if reason == FetchError::Disabled {
        info!(goal, "remote exercises disabled, using fallback table");
    } else {
        warn!(goal, error = %reason, "exercise fetch failed, using fallback table");
    }
    Enrichment::Fallback {
        goal: fallback::table_key(goal).to_string(),
        suggestions: fallback::suggestions_for(goal),
        reason,
    }
}

/// Strips markup and shortens a remote description for display.
pub fn clean_description(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => return NO_DESCRIPTION.to_string(),
    };
    let stripped = TAG_RE.replace_all(raw, "");
    let short: String = stripped.trim().chars().take(DESCRIPTION_LIMIT).collect();
    format!("{}...", short)
}
