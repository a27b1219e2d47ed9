use crate::domain::model::{Course, Price, PriceError, RawEntryInput};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name cannot be empty")]
    InvalidName,

    #[error("description cannot be empty")]
    InvalidDescription,

    #[error("invalid course '{value}', expected Starter, Main or Dessert")]
    InvalidCourse { value: String },

    #[error("invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: PriceError },
}

impl ValidationError {
    /// 對應的表單欄位名稱
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidName => "name",
            ValidationError::InvalidDescription => "description",
            ValidationError::InvalidCourse { .. } => "course",
            ValidationError::InvalidPrice { .. } => "price",
        }
    }

    /// 顯示給使用者的提示訊息
    pub fn prompt(&self) -> &'static str {
        match self {
            ValidationError::InvalidName => "Please enter a dish name",
            ValidationError::InvalidDescription => "Please enter a description",
            ValidationError::InvalidCourse { .. } => "Please select a course",
            ValidationError::InvalidPrice {
                reason: PriceError::Empty,
                ..
            } => "Please enter a price",
            ValidationError::InvalidPrice { .. } => "Please enter a valid price",
        }
    }
}

/// Every field a candidate violated, in field order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    errors: Vec<ValidationError>,
}

impl ValidationFailure {
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first(&self) -> &ValidationError {
        &self.errors[0]
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

impl<'a> IntoIterator for &'a ValidationFailure {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// A candidate that passed every check, ready to receive an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEntry {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: Price,
}

pub fn validate_candidate(raw: &RawEntryInput) -> Result<ValidatedEntry, ValidationFailure> {
    let mut errors = Vec::new();

    let name = raw.name.trim();
    if name.is_empty() {
        errors.push(ValidationError::InvalidName);
    }

    let description = raw.description.trim();
    if description.is_empty() {
        errors.push(ValidationError::InvalidDescription);
    }

    let course = match raw.course.parse::<Course>() {
        Ok(course) => Some(course),
        Err(_) => {
            errors.push(ValidationError::InvalidCourse {
                value: raw.course.clone(),
            });
            None
        }
    };

    let price = match raw.price.parse::<Price>() {
        Ok(price) => Some(price),
        Err(reason) => {
            errors.push(ValidationError::InvalidPrice {
                value: raw.price.clone(),
                reason,
            });
            None
        }
    };

    match (course, price) {
        (Some(course), Some(price)) if errors.is_empty() => Ok(ValidatedEntry {
            name: name.to_string(),
            description: description.to_string(),
            course,
            price,
        }),
        _ => Err(ValidationFailure { errors }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RawEntryInput {
        RawEntryInput::new("Soup", "Hot soup", "Starter", "5.00")
    }

    #[test]
    fn test_valid_candidate_is_trimmed() {
        let raw = RawEntryInput::new("  Soup ", "\tHot soup\n", "Starter", " 5 ");
        let entry = validate_candidate(&raw).unwrap();
        assert_eq!(entry.name, "Soup");
        assert_eq!(entry.description, "Hot soup");
        assert_eq!(entry.course, Course::Starter);
        assert_eq!(entry.price, Price::from_cents(500));
    }

    #[test]
    fn test_each_field_reports_its_own_error() {
        let mut raw = valid();
        raw.name = "   ".into();
        assert_eq!(
            validate_candidate(&raw).unwrap_err().first(),
            &ValidationError::InvalidName
        );

        let mut raw = valid();
        raw.description = String::new();
        assert_eq!(
            validate_candidate(&raw).unwrap_err().first(),
            &ValidationError::InvalidDescription
        );

        let mut raw = valid();
        raw.course = "starter".into();
        assert_eq!(
            validate_candidate(&raw).unwrap_err().first(),
            &ValidationError::InvalidCourse {
                value: "starter".into()
            }
        );

        let mut raw = valid();
        raw.price = "abc".into();
        assert_eq!(
            validate_candidate(&raw).unwrap_err().first(),
            &ValidationError::InvalidPrice {
                value: "abc".into(),
                reason: PriceError::Malformed
            }
        );
    }

    #[test]
    fn test_all_violations_reported_in_field_order() {
        let raw = RawEntryInput::new("", " ", "Drink", "-3");
        let failure = validate_candidate(&raw).unwrap_err();
        let fields: Vec<&str> = failure.iter().map(ValidationError::field).collect();
        assert_eq!(fields, vec!["name", "description", "course", "price"]);
        assert_eq!(failure.len(), 4);
    }

    #[test]
    fn test_prompts() {
        let raw = RawEntryInput::new("", "", "", "");
        let failure = validate_candidate(&raw).unwrap_err();
        let prompts: Vec<&str> = failure.iter().map(ValidationError::prompt).collect();
        assert_eq!(
            prompts,
            vec![
                "Please enter a dish name",
                "Please enter a description",
                "Please select a course",
                "Please enter a price",
            ]
        );

        let mut raw = valid();
        raw.price = "12abc".into();
        let failure = validate_candidate(&raw).unwrap_err();
        assert_eq!(failure.first().prompt(), "Please enter a valid price");
        assert!(failure.has_field("price"));
        assert!(!failure.has_field("name"));
    }
}
