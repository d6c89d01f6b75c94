//! Boundary validation: everything here runs before a record reaches the
//! controller. A measurement that fails validation is never created.

use thiserror::Error;

use crate::config::{AppConfig, NamePolicy};
use crate::models::Measurement;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("name must be {min}-{max} characters of letters and spaces")]
    NamePolicy { min: usize, max: usize },

    #[error("value is not a number: {input:?}")]
    ValueNotNumeric { input: String },

    #[error("unknown unit {unit:?} (expected one of: {known})")]
    UnknownUnit { unit: String, known: String },
}

/// Trim and check the name against the policy. Returns the trimmed name.
pub fn validate_name(name: &str, policy: &NamePolicy) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }
    let chars = name.chars().count();
    let within_length = (policy.min_chars..=policy.max_chars).contains(&chars);
    let chars_ok =
        !policy.letters_and_spaces_only || name.chars().all(is_letter_or_space);
    if !within_length || !chars_ok {
        return Err(ValidationError::NamePolicy {
            min: policy.min_chars,
            max: policy.max_chars,
        });
    }
    Ok(name.to_string())
}

// The accepted class mirrors the original form's rule: ASCII letters, the
// Latin-1/Latin-Extended range that covers Portuguese accented letters, and
// spaces.
fn is_letter_or_space(c: char) -> bool {
    c.is_ascii_alphabetic() || ('À'..='ú').contains(&c) || c == ' '
}

/// Strict float parse; empty, non-numeric, and NaN input is rejected.
pub fn parse_value(input: &str) -> Result<f64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::EmptyField { field: "value" });
    }
    match input.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::ValueNotNumeric {
            input: input.to_string(),
        }),
    }
}

/// Membership check against the configured closed unit set.
pub fn validate_unit(unit: &str, units: &[String]) -> Result<(), ValidationError> {
    if units.iter().any(|u| u == unit) {
        Ok(())
    } else {
        Err(ValidationError::UnknownUnit {
            unit: unit.to_string(),
            known: units.join(", "),
        })
    }
}

/// Validate all three fields and build the record.
pub fn parse_measurement(
    name: &str,
    value: &str,
    unit: &str,
    config: &AppConfig,
) -> Result<Measurement, ValidationError> {
    let name = validate_name(name, &config.name_policy)?;
    let value = parse_value(value)?;
    validate_unit(unit, &config.units)?;
    Ok(Measurement::new(name, value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed_and_non_empty() {
        let policy = NamePolicy::default();
        assert_eq!(validate_name("  Cintura ", &policy).unwrap(), "Cintura");
        assert_eq!(
            validate_name("   ", &policy),
            Err(ValidationError::EmptyField { field: "name" })
        );
    }

    #[test]
    fn name_policy_enforces_length_and_character_class() {
        let policy = NamePolicy::default();
        assert!(validate_name("Bíceps esquerdo", &policy).is_ok());
        assert!(validate_name("dezesseis letras", &policy).is_err());
        assert!(validate_name("Braço2", &policy).is_err());
    }

    #[test]
    fn relaxed_policy_accepts_digits() {
        let policy = NamePolicy {
            max_chars: 30,
            letters_and_spaces_only: false,
            ..Default::default()
        };
        assert!(validate_name("Braço 2 direito", &policy).is_ok());
    }

    #[test]
    fn value_parse_is_strict() {
        assert_eq!(parse_value(" 80 ").unwrap(), 80.0);
        assert_eq!(parse_value("16.5").unwrap(), 16.5);
        assert!(parse_value("80abc").is_err());
        assert!(parse_value("NaN").is_err());
        assert!(parse_value("").is_err());
    }

    #[test]
    fn unit_must_belong_to_the_closed_set() {
        let units: Vec<String> = ["cm", "in"].iter().map(|s| s.to_string()).collect();
        assert!(validate_unit("cm", &units).is_ok());
        assert!(validate_unit("furlongs", &units).is_err());
    }

    #[test]
    fn parse_measurement_combines_all_checks() {
        let config = AppConfig::default();
        let m = parse_measurement("Cintura", "80", "cm", &config).unwrap();
        assert_eq!(m, Measurement::new("Cintura", 80.0, "cm"));
        assert!(parse_measurement("", "80", "cm", &config).is_err());
        assert!(parse_measurement("Cintura", "oitenta", "cm", &config).is_err());
        assert!(parse_measurement("Cintura", "80", "parsecs", &config).is_err());
    }
}
