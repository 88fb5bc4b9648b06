//! Form Data
//!
//! Three free-text fields bound two-way to the state tab inputs.

use serde::{Deserialize, Serialize};

/// Form field selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Role,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Role];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Role => "role",
        }
    }
}

/// Free-form profile fields; no validation beyond blank checks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Role => &self.role,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Role => &mut self.role,
        }
    }

    /// Count of fields that are non-empty after trimming
    pub fn filled_count(&self) -> usize {
        FormField::ALL
            .iter()
            .filter(|field| !self.get(**field).trim().is_empty())
            .count()
    }

    /// Percentage of filled fields, rounded to the nearest integer
    pub fn completeness(&self) -> u8 {
        let total = FormField::ALL.len() as f64;
        (self.filled_count() as f64 / total * 100.0).round() as u8
    }
}
