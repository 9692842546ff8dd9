//! Typed session state.
//!
//! One owner for the current user's identity and admin status, passed down
//! to whatever needs it instead of re-reading scattered key-value flags.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Backend-issued user id.
    pub id: String,
    pub email: String,
    /// Restaurant this user manages, if any.
    pub restaurant_id: Option<Uuid>,
}

/// Authentication state for the running client.
///
/// Fields are private so admin status cannot exist without a user: the only
/// way to build an admin context is [`SessionContext::admin`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionContext {
    user: Option<CurrentUser>,
    admin: bool,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: CurrentUser) -> Self {
        Self {
            user: Some(user),
            admin: false,
        }
    }

    pub fn admin(user: CurrentUser) -> Self {
        Self {
            user: Some(user),
            admin: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }
}
