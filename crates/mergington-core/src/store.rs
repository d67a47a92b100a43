//! In-memory activity store.
//!
//! [`ActivityStore`] owns the catalog of activities for the lifetime of
//! the process. It is constructed once from a seed catalog and shared
//! with request handlers behind an [`Arc`](std::sync::Arc).
//!
//! # Concurrency
//!
//! The whole catalog sits behind a single [`RwLock`]. Listing and lookups
//! take a read lock; [`ActivityStore::add_participant`] holds the write
//! lock across the duplicate check and the append, so two concurrent
//! signups can neither lose an update nor both pass the duplicate check.

use mergington_types::{Activity, ActivityCatalog};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;

/// Roster size after a successful signup.
///
/// Capacity is advisory: the store never refuses a signup because the
/// roster is full, so callers use this to notice an over-capacity roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enrollment {
    /// Students on the roster, including the one just added.
    pub participants: u32,
    /// The activity's advertised capacity.
    pub max_participants: u32,
}

impl Enrollment {
    /// Whether the roster now exceeds the advertised capacity.
    pub const fn is_over_capacity(&self) -> bool {
        self.participants > self.max_participants
    }
}

/// Process-wide store of activities keyed by exact name.
#[derive(Debug)]
pub struct ActivityStore {
    activities: RwLock<ActivityCatalog>,
}

impl ActivityStore {
    /// Create a store holding `catalog`.
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            activities: RwLock::new(catalog),
        }
    }

    /// Snapshot of every activity.
    ///
    /// The returned map is a copy; later signups do not show up in it.
    pub async fn list_all(&self) -> ActivityCatalog {
        self.activities.read().await.clone()
    }

    /// Look up one activity by exact, case-sensitive name.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    /// Number of activities on the board.
    pub async fn activity_count(&self) -> usize {
        self.activities.read().await.len()
    }

    /// Append `email` to the roster of the activity called `name`.
    ///
    /// No capacity check is made; see [`Enrollment`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no activity has that name, or
    /// [`StoreError::AlreadyRegistered`] if `email` is already on its
    /// roster. The roster is left untouched in both cases.
    pub async fn add_participant(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Enrollment, StoreError> {
        let mut activities = self.activities.write().await;

        let activity = activities.get_mut(name).ok_or_else(|| StoreError::NotFound {
            activity: name.to_owned(),
        })?;

        if activity.is_registered(email) {
            return Err(StoreError::AlreadyRegistered {
                activity: name.to_owned(),
                email: email.to_owned(),
            });
        }

        activity.participants.push(email.to_owned());

        let enrollment = Enrollment {
            participants: activity.participant_count(),
            max_participants: activity.max_participants,
        };
        debug!(
            activity = name,
            email,
            participants = enrollment.participants,
            max_participants = enrollment.max_participants,
            "Participant added"
        );

        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn small_catalog() -> ActivityCatalog {
        let mut catalog = ActivityCatalog::new();
        catalog.insert(
            String::from("Chess Club"),
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                2,
                &["michael@mergington.edu"],
            ),
        );
        catalog.insert(
            String::from("Art Studio"),
            Activity::new("Painting and drawing", "Thursdays, 3:30 PM - 5:00 PM", 10, &[]),
        );
        catalog
    }

    fn roster(activity: Option<Activity>) -> Vec<String> {
        activity.map(|a| a.participants).unwrap_or_default()
    }

    #[tokio::test]
    async fn list_all_returns_every_activity() {
        let store = ActivityStore::new(small_catalog());
        let all = store.list_all().await;
        assert_eq!(all.len(), 2);
        assert!(all.contains_key("Chess Club"));
        assert!(all.contains_key("Art Studio"));
        assert_eq!(store.activity_count().await, 2);
    }

    #[tokio::test]
    async fn get_is_exact_match() {
        let store = ActivityStore::new(small_catalog());
        assert!(store.get("Chess Club").await.is_some());
        assert!(store.get("chess club").await.is_none());
        assert!(store.get("Chess  Club").await.is_none());
        assert!(store.get("Chess Club ").await.is_none());
        assert!(store.get("Chess").await.is_none());
    }

    #[tokio::test]
    async fn add_participant_appends_in_order() {
        let store = ActivityStore::new(small_catalog());

        let first = store.add_participant("Chess Club", "ada@mergington.edu").await;
        assert_eq!(
            first,
            Ok(Enrollment {
                participants: 2,
                max_participants: 2
            })
        );
        let second = store.add_participant("Chess Club", "grace@mergington.edu").await;
        assert!(second.is_ok_and(|e| e.is_over_capacity()));

        assert_eq!(
            roster(store.get("Chess Club").await),
            vec![
                "michael@mergington.edu",
                "ada@mergington.edu",
                "grace@mergington.edu"
            ]
        );
    }

    #[tokio::test]
    async fn add_participant_unknown_activity() {
        let store = ActivityStore::new(small_catalog());
        let result = store.add_participant("Nonexistent Club", "a@mergington.edu").await;
        assert_eq!(
            result,
            Err(StoreError::NotFound {
                activity: String::from("Nonexistent Club")
            })
        );
        assert_eq!(store.list_all().await, small_catalog());
    }

    #[tokio::test]
    async fn add_participant_rejects_duplicate() {
        let store = ActivityStore::new(small_catalog());
        let result = store
            .add_participant("Chess Club", "michael@mergington.edu")
            .await;
        assert_eq!(
            result,
            Err(StoreError::AlreadyRegistered {
                activity: String::from("Chess Club"),
                email: String::from("michael@mergington.edu"),
            })
        );
        assert_eq!(
            roster(store.get("Chess Club").await),
            vec!["michael@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn listing_is_a_snapshot() {
        let store = ActivityStore::new(small_catalog());
        let before = store.list_all().await;
        let added = store.add_participant("Art Studio", "artist@mergington.edu").await;
        assert!(added.is_ok());

        assert!(roster(before.get("Art Studio").cloned()).is_empty());
        assert_eq!(
            roster(store.get("Art Studio").await),
            vec!["artist@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn concurrent_distinct_signups_are_all_recorded() {
        let store = Arc::new(ActivityStore::new(small_catalog()));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .add_participant("Art Studio", &format!("student{i}@mergington.edu"))
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert!(matches!(handle.await, Ok(Ok(_))));
        }

        assert_eq!(roster(store.get("Art Studio").await).len(), 50);
    }

    #[tokio::test]
    async fn concurrent_duplicate_signups_record_once() {
        let store = Arc::new(ActivityStore::new(small_catalog()));

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.add_participant("Art Studio", "same@mergington.edu").await
                })
            })
            .collect();

        let mut successes = 0_u32;
        for handle in handles {
            if matches!(handle.await, Ok(Ok(_))) {
                successes = successes.saturating_add(1);
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(
            roster(store.get("Art Studio").await),
            vec!["same@mergington.edu"]
        );
    }
}
