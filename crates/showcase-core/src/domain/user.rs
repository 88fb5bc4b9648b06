//! User Entity
//!
//! A roster entry with an online/offline flag.

use serde::{Deserialize, Serialize};

/// Roster user shown in the list tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, stable identifier
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    /// Online status, flipped by the roster toggle
    pub is_active: bool,
}

impl User {
    /// Build a user whose avatar comes from the initials service
    pub fn new(id: u32, name: &str, email: &str, is_active: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: format!(
                "https://ui-avatars.com/api/?name={}&background=random",
                name.replace(' ', "+")
            ),
            is_active,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "online"
        } else {
            "offline"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_url_encodes_spaces() {
        let user = User::new(1, "Zhang San", "zhangsan@example.com", true);
        assert_eq!(
            user.avatar_url,
            "https://ui-avatars.com/api/?name=Zhang+San&background=random"
        );
        assert_eq!(user.status_label(), "online");
    }
}
