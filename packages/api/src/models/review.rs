use serde::{Deserialize, Serialize};

use super::non_empty;

pub const MAX_RATING: u8 = 5;

/// Body of `POST /patient/reviews`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewRequest {
    pub doctor_id: String,
    pub appointment_id: String,
    pub rating: u8,
    pub comment: Option<String>,
}

impl ReviewRequest {
    /// Validate the rating and drop a blank comment.
    pub fn new(
        doctor_id: impl Into<String>,
        appointment_id: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, &'static str> {
        validate_rating(rating)?;
        Ok(Self {
            doctor_id: doctor_id.into(),
            appointment_id: appointment_id.into(),
            rating,
            comment: non_empty(Some(comment.into())),
        })
    }
}

/// Ratings run 1 to 5; 0 means the patient has not picked one yet.
pub fn validate_rating(rating: u8) -> Result<(), &'static str> {
    match rating {
        0 => Err("Please select a rating."),
        r if r > MAX_RATING => Err("Rating must be between 1 and 5."),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(validate_rating(0), Err("Please select a rating."));
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_blank_comment_is_dropped() {
        let review = ReviewRequest::new("d1", "a1", 4, "   ").unwrap();
        assert_eq!(review.comment, None);
        let review = ReviewRequest::new("d1", "a1", 4, "Great").unwrap();
        assert_eq!(review.comment.as_deref(), Some("Great"));
    }
}
