//! User identity types.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// The profile the backend returns alongside a login token.
///
/// Persisted JSON-encoded under the `user` durable-storage key so the
/// session can be restored across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Server-assigned ID.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
}
