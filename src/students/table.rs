//! The table container's state and reducer
//!
//! `StudentTable` exclusively owns the ordered collection. Rows and the
//! drag layer never touch it directly: they produce a [`Msg`] and the app
//! hands it to [`StudentTable::update`].

use super::{seed, Field, Student, StudentId};
use thiserror::Error;
use tracing::debug;

/// Commands dispatched up to the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A row's input produced a new value for one field
    FieldEdited {
        id: StudentId,
        field: Field,
        value: String,
    },
    /// A drag ended with `active` released over `over`
    Reordered { active: StudentId, over: StudentId },
}

/// What an applied message did to the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Collection left as it was
    None,
    /// One field of one record was replaced
    Edited { id: StudentId, field: Field },
    /// One record moved from `from` to `to`; the records between shifted by one
    Moved {
        id: StudentId,
        from: usize,
        to: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("no student with id {0}")]
    UnknownStudent(StudentId),
}

/// Ordered collection of student records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentTable {
    students: Vec<Student>,
}

impl StudentTable {
    /// Table with the fixed three-record seed
    pub fn seeded() -> Self {
        Self::from_students(seed())
    }

    pub fn from_students(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: StudentId) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    /// Ids in display order (the sortable item list)
    pub fn ids(&self) -> Vec<StudentId> {
        self.students.iter().map(|s| s.id).collect()
    }

    /// Apply one message. On error the collection is untouched.
    pub fn update(&mut self, msg: Msg) -> Result<Change, TableError> {
        match msg {
            Msg::FieldEdited { id, field, value } => self.edit(id, field, value),
            Msg::Reordered { active, over } => self.reorder(active, over),
        }
    }

    fn edit(&mut self, id: StudentId, field: Field, value: String) -> Result<Change, TableError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(TableError::UnknownStudent(id))?;

        if student.value(field) == value {
            return Ok(Change::None);
        }

        debug!(%id, %field, "field edited");
        student.set(field, value);
        Ok(Change::Edited { id, field })
    }

    fn reorder(&mut self, active: StudentId, over: StudentId) -> Result<Change, TableError> {
        if active == over {
            return Ok(Change::None);
        }

        // Resolve both ids before touching the vec
        let from = self
            .position(active)
            .ok_or(TableError::UnknownStudent(active))?;
        let to = self
            .position(over)
            .ok_or(TableError::UnknownStudent(over))?;

        let moved = self.students.remove(from);
        self.students.insert(to, moved);

        debug!(id = %active, from, to, "student moved");
        Ok(Change::Moved {
            id: active,
            from,
            to,
        })
    }
}

impl Default for StudentTable {
    fn default() -> Self {
        Self::seeded()
    }
}
