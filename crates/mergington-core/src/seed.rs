//! Built-in Mergington High School activity catalog and seed validation.
//!
//! The store is constructed from this catalog unless the config file
//! provides its own `activities` section.

use std::collections::BTreeSet;

use mergington_types::{Activity, ActivityCatalog};

/// A seed catalog that would put the store in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// An activity advertises no places at all.
    #[error("activity {activity} has max_participants of 0")]
    ZeroCapacity {
        /// The offending activity.
        activity: String,
    },

    /// An activity starts with more students than it has places.
    #[error("activity {activity} starts with {participants} participants but max is {max_participants}")]
    OverCapacity {
        /// The offending activity.
        activity: String,
        /// Students on the seeded roster.
        participants: usize,
        /// Advertised capacity.
        max_participants: u32,
    },

    /// An email appears twice on one seeded roster.
    #[error("activity {activity} lists {email} more than once")]
    DuplicateParticipant {
        /// The offending activity.
        activity: String,
        /// The repeated email.
        email: String,
    },
}

/// The activities Mergington High School offers out of the box.
pub fn default_catalog() -> ActivityCatalog {
    [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Practice drills and compete in inter-school basketball games",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Train with the varsity squad and play weekend matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["lucas@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            Activity::new(
                "Explore painting, drawing, and mixed media with guided projects",
                "Thursdays, 3:30 PM - 5:00 PM",
                18,
                &["amelia@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform in the spring and winter school productions",
                "Wednesdays, 3:30 PM - 5:30 PM",
                25,
                &["ella@mergington.edu", "henry@mergington.edu"],
            ),
        ),
        (
            "Math Olympiad",
            Activity::new(
                "Solve challenging problems and prepare for math competitions",
                "Mondays, 3:30 PM - 4:30 PM",
                10,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Debate Society",
            Activity::new(
                "Build public speaking skills and argue current topics in tournaments",
                "Fridays, 4:00 PM - 5:30 PM",
                16,
                &["ava@mergington.edu", "noah@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_owned(), activity))
    .collect()
}

/// Check that every seeded roster fits its capacity and has no duplicates.
///
/// # Errors
///
/// Returns the first [`SeedError`] found, in activity name order.
pub fn validate_catalog(catalog: &ActivityCatalog) -> Result<(), SeedError> {
    for (name, activity) in catalog {
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity {
                activity: name.clone(),
            });
        }

        if activity.is_over_capacity() {
            return Err(SeedError::OverCapacity {
                activity: name.clone(),
                participants: activity.participants.len(),
                max_participants: activity.max_participants,
            });
        }

        let mut seen = BTreeSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
    }

    Ok(())
}
