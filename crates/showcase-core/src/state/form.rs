//! Form tracker operations

use super::ShowcaseState;
use crate::domain::{FormData, FormField};
use crate::event::StateEvent;

impl ShowcaseState {
    pub fn form(&self) -> &FormData {
        &self.form
    }

    /// Derived: percentage of non-blank fields
    pub fn form_completeness(&self) -> u8 {
        self.form.completeness()
    }

    pub fn set_form_field(&mut self, field: FormField, value: &str) {
        self.edit_form(|form| {
            let slot = form.field_mut(field);
            slot.clear();
            slot.push_str(value);
        });
    }

    pub fn clear_form(&mut self) {
        self.edit_form(|form| *form = FormData::default());
    }

    // Snapshot compare stands in for deep watching
    fn edit_form(&mut self, edit: impl FnOnce(&mut FormData)) {
        let before = self.form.clone();
        edit(&mut self.form);
        if self.form != before {
            self.emit(StateEvent::FormChanged(self.form.clone()));
        }
    }
}
