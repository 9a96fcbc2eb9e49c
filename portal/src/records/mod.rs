//! Record stores: employees, projects and documents
//!
//! Each store is an ordered in-memory list with its own id sequence.

pub mod documents;
pub mod employees;
pub mod projects;

pub use documents::{DocumentLibrary, UploadRewards};
pub use employees::EmployeeDirectory;
pub use projects::{ProjectBoard, ProjectError};

use shared::types::RecordId;

/// Monotonic id source for one list
///
/// Ids are never reused, even after deletes, so they stay unique within
/// the list for the whole session.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: RecordId,
}

impl IdSequence {
    /// Start after the highest id already present
    pub fn after(existing: impl IntoIterator<Item = RecordId>) -> Self {
        let max = existing.into_iter().max().unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> RecordId {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_starts_after_max() {
        let mut ids = IdSequence::after([3, 1, 5]);
        assert_eq!(ids.next_id(), 6);
        assert_eq!(ids.next_id(), 7);
        assert_eq!(IdSequence::after([]).next_id(), 1);
    }
}
