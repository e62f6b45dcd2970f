use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Public doctor profile from `/doctors/search`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub bio: Option<String>,
    /// ISO timestamps of bookable slots.
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_slots: Vec<String>,
    #[serde(default)]
    pub clinic_name: Option<String>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
}

impl Doctor {
    /// Whole stars to light up for the average rating, out of five.
    pub fn filled_stars(&self) -> usize {
        filled_stars(self.average_rating)
    }
}

/// Round a 0-5 rating to whole stars.
pub fn filled_stars(rating: Option<f64>) -> usize {
    let rating = rating.unwrap_or(0.0);
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.round() as usize).min(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_slots_deserialize_as_empty() {
        let doctor: Doctor = serde_json::from_value(serde_json::json!({
            "id": "d1",
            "name": "Dr. Rao",
            "specialty": "Cardiology",
            "experience": 12,
            "available_slots": null,
            "average_rating": null,
        }))
        .unwrap();
        assert!(doctor.available_slots.is_empty());
        assert_eq!(doctor.review_count, 0);
        assert_eq!(doctor.filled_stars(), 0);
    }

    #[test]
    fn test_filled_stars_rounding() {
        assert_eq!(filled_stars(Some(4.4)), 4);
        assert_eq!(filled_stars(Some(4.5)), 5);
        assert_eq!(filled_stars(Some(9.0)), 5);
        assert_eq!(filled_stars(Some(f64::NAN)), 0);
        assert_eq!(filled_stars(None), 0);
    }
}
