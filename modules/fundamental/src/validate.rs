use crate::Error;
use herodex_entity::strength::Strength;
use std::str::FromStr;

pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// A power description must be present and at least 20 characters long.
pub fn validate_description(value: Option<&str>) -> Result<String, Error> {
    match value {
        Some(description) if description.chars().count() >= DESCRIPTION_MIN_CHARS => {
            Ok(description.to_string())
        }
        _ => Err(Error::validation(
            "Description must be at least 20 characters long",
        )),
    }
}

/// An association strength must be exactly one of the three wire names.
pub fn validate_strength(value: &str) -> Result<Strength, Error> {
    Strength::from_str(value)
        .map_err(|_| Error::validation("Strength must be 'Strong', 'Weak', or 'Average'"))
}
