use actix_web::http::StatusCode;
use reflinker::errors::ReferralError;
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = ReferralError::validation("User ID cannot be empty.");

        assert!(matches!(error, ReferralError::Validation(_)));
        assert!(error.to_string().contains("Validation Error"));
        assert!(error.to_string().contains("User ID cannot be empty."));
    }

    #[test]
    fn test_not_found_error() {
        let error = ReferralError::not_found("Referral not found.");

        assert!(matches!(error, ReferralError::NotFound(_)));
        assert!(error.to_string().contains("Resource Not Found"));
        assert!(error.to_string().contains("Referral not found."));
    }

    #[test]
    fn test_invalid_transition_error() {
        let error = ReferralError::invalid_transition("Cannot update a terminal referral.");

        assert!(matches!(error, ReferralError::InvalidTransition(_)));
        assert!(error.to_string().contains("Invalid Status Transition"));
    }

    #[test]
    fn test_precondition_failed_error() {
        let error = ReferralError::precondition_failed("Referral must be claimed first.");

        assert!(matches!(error, ReferralError::PreconditionFailed(_)));
        assert!(error.to_string().contains("Precondition Failed"));
    }

    #[test]
    fn test_claim_errors() {
        assert!(matches!(
            ReferralError::already_claimed("x"),
            ReferralError::AlreadyClaimed(_)
        ));
        assert!(matches!(
            ReferralError::not_claimable("x"),
            ReferralError::NotClaimable(_)
        ));
        assert!(matches!(
            ReferralError::self_claim("x"),
            ReferralError::SelfClaim(_)
        ));
        assert!(matches!(
            ReferralError::duplicate_claim("x"),
            ReferralError::DuplicateClaim(_)
        ));
    }

    #[test]
    fn test_file_operation_error() {
        let error = ReferralError::file_operation("Failed to write referrals file");

        assert!(matches!(error, ReferralError::FileOperation(_)));
        assert!(error.to_string().contains("File Operation Error"));
    }
}

#[cfg(test)]
mod error_metadata_tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = [
            ReferralError::validation("x"),
            ReferralError::not_found("x"),
            ReferralError::invalid_transition("x"),
            ReferralError::precondition_failed("x"),
            ReferralError::already_claimed("x"),
            ReferralError::not_claimable("x"),
            ReferralError::self_claim("x"),
            ReferralError::duplicate_claim("x"),
            ReferralError::storage_operation("x"),
            ReferralError::file_operation("x"),
            ReferralError::serialization("x"),
        ];

        let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            ReferralError::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReferralError::precondition_failed("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ReferralError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ReferralError::invalid_transition("x").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ReferralError::already_claimed("x").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ReferralError::duplicate_claim("x").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ReferralError::serialization("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_format_simple() {
        let error = ReferralError::self_claim("A user cannot claim their own referral.");
        assert_eq!(
            error.format_simple(),
            "Self Claim Rejected: A user cannot claim their own referral."
        );
    }

    #[test]
    fn test_message_returns_detail_only() {
        let error = ReferralError::duplicate_claim("Claimant has already claimed a referral.");
        assert_eq!(error.message(), "Claimant has already claimed a referral.");
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let error: ReferralError = io_error.into();

        assert!(matches!(error, ReferralError::FileOperation(_)));
        assert!(error.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: ReferralError = json_error.into();

        assert!(matches!(error, ReferralError::Serialization(_)));
    }

    #[test]
    fn test_error_trait_object() {
        let error = ReferralError::validation("bad input");
        let boxed: Box<dyn Error> = Box::new(error);
        assert!(boxed.to_string().contains("bad input"));
    }
}
