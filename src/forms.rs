use serde::Deserialize;

pub const REQUIRED: &str = "This field is required.";
pub const NOT_A_NUMBER: &str = "Not a valid number.";
pub const RATING_RANGE: &str = "Between 1 -10";

#[derive(Debug, Default, Deserialize)]
pub struct AddForm {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Default)]
pub struct AddFormErrors {
    pub title: Option<&'static str>,
}

impl AddForm {
    pub fn validate(&self) -> Result<String, AddFormErrors> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AddFormErrors { title: Some(REQUIRED) });
        }
        Ok(title.to_string())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateForm {
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub review: String,
}

#[derive(Debug, Default)]
pub struct UpdateFormErrors {
    pub rating: Option<&'static str>,
    pub review: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct ReviewUpdate {
    pub rating: f64,
    pub review: String,
}

impl UpdateForm {
    pub fn validate(&self) -> Result<ReviewUpdate, UpdateFormErrors> {
        let mut errors = UpdateFormErrors::default();

        let rating = match self.rating.trim() {
            "" => {
                errors.rating = Some(REQUIRED);
                None
            },
            raw => match raw.parse::<f64>() {
                Err(_) => {
                    errors.rating = Some(NOT_A_NUMBER);
                    None
                },
                // NaN fails the contains check and lands here too.
                Ok(parsed) if !(1.0..=10.0).contains(&parsed) => {
                    errors.rating = Some(RATING_RANGE);
                    None
                },
                Ok(parsed) => Some(parsed),
            },
        };

        let review = self.review.trim();
        if review.is_empty() {
            errors.review = Some(REQUIRED);
        }

        match rating {
            Some(rating) if errors.review.is_none() => {
                Ok(ReviewUpdate { rating, review: review.to_string() })
            },
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(rating: &str, review: &str) -> UpdateForm {
        UpdateForm { rating: rating.to_string(), review: review.to_string() }
    }

    #[test]
    fn add_form_requires_a_title() {
        let err = AddForm { title: "   ".to_string() }.validate().unwrap_err();
        assert_eq!(err.title, Some(REQUIRED));

        let title = AddForm { title: " Armageddon ".to_string() }.validate().unwrap();
        assert_eq!(title, "Armageddon");
    }

    #[test]
    fn update_form_accepts_ratings_inside_the_range() {
        let ok = update("7.5", "Great.").validate().unwrap();
        assert_eq!(ok, ReviewUpdate { rating: 7.5, review: "Great.".to_string() });

        assert!(update("1", "edge").validate().is_ok());
        assert!(update("10", "edge").validate().is_ok());
    }

    #[test]
    fn out_of_range_ratings_get_the_range_message() {
        for raw in ["0.9", "10.1", "-3", "100", "NaN"] {
            let err = update(raw, "fine").validate().unwrap_err();
            assert_eq!(err.rating, Some(RATING_RANGE), "rating {raw:?}");
            assert_eq!(err.review, None);
        }
    }

    #[test]
    fn non_numeric_ratings_are_rejected() {
        let err = update("eleven", "fine").validate().unwrap_err();
        assert_eq!(err.rating, Some(NOT_A_NUMBER));
    }

    #[test]
    fn empty_fields_are_required() {
        let err = update("", "").validate().unwrap_err();
        assert_eq!(err.rating, Some(REQUIRED));
        assert_eq!(err.review, Some(REQUIRED));

        let err = update("7.5", "  ").validate().unwrap_err();
        assert_eq!(err.rating, None);
        assert_eq!(err.review, Some(REQUIRED));
    }

    #[test]
    fn review_whitespace_is_trimmed() {
        let ok = update("8", "  tight  ").validate().unwrap();
        assert_eq!(ok.review, "tight");
    }
}
