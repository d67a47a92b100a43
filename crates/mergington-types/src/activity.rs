//! The [`Activity`] record and the catalog map keyed by activity name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// All activities keyed by their exact, case-sensitive name.
///
/// A [`BTreeMap`] keeps the listing deterministic (lexicographic by name).
pub type ActivityCatalog = BTreeMap<String, Activity>;

/// An extracurricular activity students can sign up for.
///
/// The activity's name is not stored here; it is the key of the
/// [`ActivityCatalog`] the record lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Activity {
    /// Free-text description shown on the board.
    pub description: String,
    /// Free-text meeting time (e.g. "Fridays, 3:30 PM - 5:00 PM").
    pub schedule: String,
    /// Advertised capacity. Signup treats this as a soft cap.
    pub max_participants: u32,
    /// Student emails in signup order. Never contains duplicates.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Build an activity from borrowed seed values.
    pub fn new(
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            description: description.to_owned(),
            schedule: schedule.to_owned(),
            max_participants,
            participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    /// Whether `email` is already on the roster (exact string match).
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Number of students on the roster, saturating at `u32::MAX`.
    pub fn participant_count(&self) -> u32 {
        u32::try_from(self.participants.len()).unwrap_or(u32::MAX)
    }

    /// Whether the roster holds more students than the advertised capacity.
    pub fn is_over_capacity(&self) -> bool {
        self.participant_count() > self.max_participants
    }
}
