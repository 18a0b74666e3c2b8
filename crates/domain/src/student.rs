//! Students: an occupant assigned to exactly one room.

use serde::{Deserialize, Serialize};

use crate::error::{HostelError, ValidationError};
use crate::id::{RoomId, StudentId};

/// A persisted student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub semester: String,
    pub fee_paid: bool,
    pub room_id: RoomId,
}

impl Student {
    /// Overwrite every mutable field with `details`, keeping the id.
    #[must_use]
    pub fn apply(self, details: StudentDetails) -> Self {
        details.with_id(self.id)
    }
}

/// The mutable part of a [`Student`]: what a caller supplies on create and
/// on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDetails {
    pub name: String,
    pub semester: String,
    pub fee_paid: bool,
    pub room_id: RoomId,
}

impl StudentDetails {
    /// Create a builder for details targeting `room_id`.
    #[must_use]
    pub fn builder(room_id: RoomId) -> StudentDetailsBuilder {
        StudentDetailsBuilder {
            room_id,
            name: None,
            semester: None,
            fee_paid: false,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), HostelError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            semester: self.semester,
            fee_paid: self.fee_paid,
            room_id: self.room_id,
        }
    }
}

/// Step-by-step builder for [`StudentDetails`].
#[derive(Debug)]
pub struct StudentDetailsBuilder {
    room_id: RoomId,
    name: Option<String>,
    semester: Option<String>,
    fee_paid: bool,
}

impl StudentDetailsBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = Some(semester.into());
        self
    }

    #[must_use]
    pub fn fee_paid(mut self, fee_paid: bool) -> Self {
        self.fee_paid = fee_paid;
        self
    }

    /// Consume the builder, validate, and return the details.
    ///
    /// # Errors
    ///
    /// Returns [`HostelError::Validation`] if `name` is missing or blank.
    pub fn build(self) -> Result<StudentDetails, HostelError> {
        let details = StudentDetails {
            name: self.name.map(|n| n.trim().to_string()).unwrap_or_default(),
            semester: self.semester.unwrap_or_default(),
            fee_paid: self.fee_paid,
            room_id: self.room_id,
        };
        details.validate()?;
        Ok(details)
    }
}

/// A student row joined with the number of the room they live in.
///
/// `room_number` is `None` only if the room reference were dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentListing {
    pub id: StudentId,
    pub name: String,
    pub semester: String,
    pub fee_paid: bool,
    pub room_id: RoomId,
    pub room_number: Option<i64>,
}

/// Optional narrowing applied to a student listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentFilter {
    /// Keep only paid (`true`) or unpaid (`false`) students.
    pub fee_paid: Option<bool>,
    /// Case-insensitive substring matched against name and semester.
    pub search: Option<String>,
}

impl StudentFilter {
    /// Whether `listing` passes every criterion set on this filter.
    #[must_use]
    pub fn matches(&self, listing: &StudentListing) -> bool {
        if self.fee_paid.is_some_and(|paid| paid != listing.fee_paid) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                listing.name.to_lowercase().contains(&term)
                    || listing.semester.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, semester: &str, fee_paid: bool) -> StudentListing {
        StudentListing {
            id: StudentId::new(1),
            name: name.to_string(),
            semester: semester.to_string(),
            fee_paid,
            room_id: RoomId::new(1),
            room_number: Some(101),
        }
    }

    #[test]
    fn should_build_valid_details_when_name_provided() {
        let details = StudentDetails::builder(RoomId::new(4))
            .name("Asha")
            .semester("3rd")
            .fee_paid(true)
            .build()
            .unwrap();

        assert_eq!(details.name, "Asha");
        assert_eq!(details.room_id, RoomId::new(4));
        assert!(details.fee_paid);
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = StudentDetails::builder(RoomId::new(1)).name("   ").build();
        assert!(matches!(
            result,
            Err(HostelError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_id_when_applying_new_details() {
        let student = StudentDetails::builder(RoomId::new(1))
            .name("Asha")
            .build()
            .unwrap()
            .with_id(StudentId::new(9));
        let moved = StudentDetails::builder(RoomId::new(2))
            .name("Asha K")
            .semester("4th")
            .build()
            .unwrap();

        let updated = student.apply(moved);
        assert_eq!(updated.id, StudentId::new(9));
        assert_eq!(updated.room_id, RoomId::new(2));
        assert_eq!(updated.semester, "4th");
    }

    #[test]
    fn should_match_everything_when_filter_is_empty() {
        let filter = StudentFilter::default();
        assert!(filter.matches(&listing("Ravi", "1st", false)));
    }

    #[test]
    fn should_filter_by_fee_status() {
        let filter = StudentFilter {
            fee_paid: Some(true),
            search: None,
        };
        assert!(filter.matches(&listing("Ravi", "1st", true)));
        assert!(!filter.matches(&listing("Ravi", "1st", false)));
    }

    #[test]
    fn should_search_name_and_semester_case_insensitively() {
        let filter = StudentFilter {
            fee_paid: None,
            search: Some("RAV".to_string()),
        };
        assert!(filter.matches(&listing("Ravi", "1st", true)));
        assert!(!filter.matches(&listing("Meena", "1st", true)));

        let by_semester = StudentFilter {
            fee_paid: None,
            search: Some("fall".to_string()),
        };
        assert!(by_semester.matches(&listing("Meena", "Fall 2024", true)));
    }
}
