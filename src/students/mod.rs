//! Student records and the table that owns them
//!
//! The record types here are plain data. All mutation goes through
//! [`StudentTable::update`], which is the only writer of the collection.

mod table;

pub use table::{Change, Msg, StudentTable, TableError};

use std::fmt;

/// Stable identifier of a student record
///
/// Assigned once when the record is created and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One student's editable data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub contact: String,
}

impl Student {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id: StudentId(id),
            name: name.into(),
            email: email.into(),
            contact: contact.into(),
        }
    }

    /// Current value of a field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
        }
    }

    /// Replace a single field, leaving the others untouched
    pub(crate) fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Contact => self.contact = value,
        }
    }
}

/// How an input cell treats its value (mirrors HTML input types)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
}

/// The editable fields of a record, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Contact,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Student Name",
            Field::Email => "Email",
            Field::Contact => "Contact",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        // Same text as the column header
        self.label()
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Field::Email => InputKind::Email,
            Field::Name | Field::Contact => InputKind::Text,
        }
    }

    /// Column index among the input cells (0-based)
    pub fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Contact => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Contact => "contact",
        };
        f.write_str(name)
    }
}

/// Validation hint for an input value
///
/// Hints are advisory, like browser constraint validation: they are shown
/// next to the field but never block an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Field is required but empty
    Required,
    /// Value does not look like an email address
    InvalidEmail,
}

impl Hint {
    pub fn message(&self) -> &'static str {
        match self {
            Hint::Required => "Please fill out this field.",
            Hint::InvalidEmail => "Please include an '@' and a domain in the email address.",
        }
    }
}

/// Check a value against its field's constraints (all fields are required)
pub fn validate(field: Field, value: &str) -> Option<Hint> {
    if value.is_empty() {
        return Some(Hint::Required);
    }
    match field.kind() {
        InputKind::Email if !looks_like_email(value) => Some(Hint::InvalidEmail),
        _ => None,
    }
}

/// Loose `local@domain` check in the spirit of `<input type="email">`
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').all(|label| !label.is_empty())
}

/// The three records every table starts with
pub fn seed() -> Vec<Student> {
    vec![
        Student::new(1, "John Doe", "john@example.com", "1234567890"),
        Student::new(2, "Jane Smith", "jane@example.com", "9876543210"),
        Student::new(3, "Bob Johnson", "bob@example.com", "5555555555"),
    ]
}
