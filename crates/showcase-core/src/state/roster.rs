//! User roster operations

use super::ShowcaseState;
use crate::domain::User;
use crate::event::StateEvent;

impl ShowcaseState {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn active_user_count(&self) -> usize {
        self.users.iter().filter(|user| user.is_active).count()
    }

    /// Flip a user's online flag. Returns the new flag, or `None` when no
    /// user has that id.
    pub fn toggle_user_status(&mut self, user_id: u32) -> Option<bool> {
        let user = self.users.iter_mut().find(|user| user.id == user_id)?;
        let was_active = user.is_active;
        user.is_active = !was_active;
        let event = StateEvent::UserStatusChanged {
            id: user.id,
            name: user.name.clone(),
            was_active,
            is_active: user.is_active,
        };
        let is_active = user.is_active;
        self.emit(event);
        Some(is_active)
    }
}
