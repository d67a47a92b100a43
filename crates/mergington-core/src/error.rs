//! Error types for activity store operations.

/// Reasons a signup can be refused by the [`ActivityStore`].
///
/// Both variants are terminal: retrying the same request yields the
/// same error.
///
/// [`ActivityStore`]: crate::store::ActivityStore
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No activity has this exact name.
    #[error("activity not found: {activity}")]
    NotFound {
        /// The name that was looked up.
        activity: String,
    },

    /// The email is already on the activity's roster.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered {
        /// The activity signed up for.
        activity: String,
        /// The duplicate email.
        email: String,
    },
}
