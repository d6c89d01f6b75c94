//! Filter criteria and the predicate that narrows the displayed collection
//! without mutating it.

use crate::models::Measurement;

/// Name/value/unit triple. Empty fields match everything; the unit field
/// additionally treats the configured all-units sentinel as match-all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name: String,
    pub value: String,
    pub unit: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.value.is_empty() && self.unit.is_empty()
    }
}

/// Conjunction of the three criteria:
/// - name: case-insensitive substring of the record's name;
/// - value: substring of the value's decimal text form (intentionally a
///   textual match, so "1" matches 21 as well as 1);
/// - unit: exact equality, with empty or `all_units` matching everything.
pub fn matches(m: &Measurement, criteria: &FilterCriteria, all_units: &str) -> bool {
    let name_ok = m
        .name
        .to_lowercase()
        .contains(&criteria.name.to_lowercase());
    let value_ok = criteria.value.is_empty() || m.value.to_string().contains(&criteria.value);
    let unit_ok =
        criteria.unit.is_empty() || criteria.unit == all_units || m.unit == criteria.unit;
    name_ok && value_ok && unit_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &str = "Todas";

    fn fixtures() -> Vec<Measurement> {
        vec![
            Measurement::new("Waist", 80.0, "cm"),
            Measurement::new("Chest", 95.0, "cm"),
            Measurement::new("Hip", 21.0, "in"),
        ]
    }

    fn apply(items: &[Measurement], criteria: &FilterCriteria) -> Vec<String> {
        items
            .iter()
            .filter(|m| matches(m, criteria, ALL))
            .map(|m| m.name.clone())
            .collect()
    }

    #[test]
    fn empty_criteria_match_everything_in_order() {
        let items = fixtures();
        let criteria = FilterCriteria::default();
        assert_eq!(apply(&items, &criteria), ["Waist", "Chest", "Hip"]);
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let items = fixtures();
        let criteria = FilterCriteria {
            name: "ai".into(),
            unit: ALL.into(),
            ..Default::default()
        };
        assert_eq!(apply(&items, &criteria), ["Waist"]);
    }

    #[test]
    fn value_match_is_textual_substring() {
        let items = fixtures();
        let criteria = FilterCriteria {
            value: "1".into(),
            unit: ALL.into(),
            ..Default::default()
        };
        // 21 contains "1"; 80 and 95 do not.
        assert_eq!(apply(&items, &criteria), ["Hip"]);
    }

    #[test]
    fn unit_match_is_exact_and_stable() {
        let items = fixtures();
        let criteria = FilterCriteria {
            unit: "cm".into(),
            ..Default::default()
        };
        assert_eq!(apply(&items, &criteria), ["Waist", "Chest"]);
    }

    #[test]
    fn criteria_are_conjunctive() {
        let items = fixtures();
        let criteria = FilterCriteria {
            name: "i".into(),
            value: "8".into(),
            unit: "cm".into(),
        };
        // "Waist" and "Hip" contain "i", but only Waist is 80 cm.
        assert_eq!(apply(&items, &criteria), ["Waist"]);
    }

    #[test]
    fn fractional_values_match_their_text_form() {
        let items = vec![Measurement::new("Wrist", 16.5, "cm")];
        let criteria = FilterCriteria {
            value: "6.5".into(),
            ..Default::default()
        };
        assert_eq!(apply(&items, &criteria), ["Wrist"]);
    }
}
