use serde::{Deserialize, Serialize};

use crate::{PropertyStatus, VillageDetails};

pub const REJECTION_REASON_MAX_LEN: usize = 500;

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Transition a property's review status.
///
/// `rejection_reason` is required when `status` is `Rejected` and ignored
/// otherwise; the backend enforces this too, but the UI validates first so
/// the moderator gets inline feedback.
#[derive(Serialize, Deserialize)]
pub struct UpdatePropertyStatus {
    pub status: PropertyStatus,
    pub rejection_reason: Option<String>,
}

/// Validation result for a status transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChangeValidation {
    Valid,
    MissingRejectionReason,
    ReasonTooLong,
}

impl StatusChangeValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::MissingRejectionReason => {
                Some("A rejection reason is required")
            }
            Self::ReasonTooLong => {
                Some("Rejection reason must be at most 500 characters")
            }
        }
    }
}

pub fn validate_status_change(
    status: PropertyStatus,
    rejection_reason: Option<&str>,
) -> StatusChangeValidation {
    if status == PropertyStatus::Rejected {
        match rejection_reason.map(str::trim) {
            None | Some("") => {
                return StatusChangeValidation::MissingRejectionReason;
            }
            Some(reason) if reason.len() > REJECTION_REASON_MAX_LEN => {
                return StatusChangeValidation::ReasonTooLong;
            }
            Some(_) => {}
        }
    }
    StatusChangeValidation::Valid
}

#[derive(Serialize, Deserialize)]
pub struct CreateVillage {
    pub details: VillageDetails,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateVillage {
    pub details: VillageDetails,
}

/// Bulk save of localized page content. The full merged map is flattened
/// into triples; the backend replaces the page's live entries wholesale.
#[derive(Serialize, Deserialize)]
pub struct SavePageContent {
    pub entries: Vec<crate::ContentEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_requires_reason() {
        assert_eq!(
            validate_status_change(PropertyStatus::Rejected, None),
            StatusChangeValidation::MissingRejectionReason
        );
        assert_eq!(
            validate_status_change(PropertyStatus::Rejected, Some("  ")),
            StatusChangeValidation::MissingRejectionReason
        );
        assert!(
            validate_status_change(
                PropertyStatus::Rejected,
                Some("Listing photos do not match the address")
            )
            .is_valid()
        );
    }

    #[test]
    fn non_rejection_ignores_reason() {
        assert!(
            validate_status_change(PropertyStatus::Published, None).is_valid()
        );
        assert!(validate_status_change(PropertyStatus::Sold, None).is_valid());
    }

    #[test]
    fn overlong_reason_is_rejected() {
        let reason = "x".repeat(REJECTION_REASON_MAX_LEN + 1);
        assert_eq!(
            validate_status_change(PropertyStatus::Rejected, Some(&reason)),
            StatusChangeValidation::ReasonTooLong
        );
    }
}
