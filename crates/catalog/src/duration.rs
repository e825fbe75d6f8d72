use crate::error::{CatalogError, Result};
use std::collections::HashMap;

/// Parse a free-text cooking duration into whole minutes.
///
/// Accepted shapes, checked in order: a "No Time" marker (0 minutes), a
/// range joined by " - " (resolved to its upper bound), a compound
/// "H hr(s) and M mins", a bare hour count ("2 hrs"), or a bare minute
/// count ("45 mins"). Anything without a parseable leading integer is a
/// `DurationFormat` error.
pub fn parse_duration(text: &str) -> Result<u32> {
    if text.contains("No Time") {
        return Ok(0);
    }

    // "20 mins - 40 mins" keeps the upper bound
    let text = match text.rsplit_once(" - ") {
        Some((_, upper)) => upper,
        None => text,
    };

    if let Some((hours, minutes)) = text.split_once(" and ") {
        return Ok(60 * leading_int(hours)? + leading_int(minutes)?);
    }

    if text.contains("hr") {
        return Ok(60 * leading_int(text)?);
    }

    leading_int(text)
}

/// Combined preparation + cooking minutes for one record's `times` map.
/// A missing entry counts as zero; both missing yields 0.
pub fn combine_duration(times: &HashMap<String, String>) -> Result<u32> {
    let preparation = times.get("Preparation").map(String::as_str).unwrap_or("0");
    let cooking = times.get("Cooking").map(String::as_str).unwrap_or("0");

    Ok(parse_duration(preparation)? + parse_duration(cooking)?)
}

fn leading_int(text: &str) -> Result<u32> {
    text.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| CatalogError::DurationFormat(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_time_marker() {
        assert_eq!(parse_duration("No Time").unwrap(), 0);
    }

    #[test]
    fn test_compound_hours_and_minutes() {
        assert_eq!(parse_duration("1 hr and 30 mins").unwrap(), 90);
        assert_eq!(parse_duration("4 hrs and 5 mins").unwrap(), 245);
    }

    #[test]
    fn test_bare_hours() {
        assert_eq!(parse_duration("2 hrs").unwrap(), 120);
        assert_eq!(parse_duration("1 hr").unwrap(), 60);
    }

    #[test]
    fn test_bare_minutes() {
        assert_eq!(parse_duration("45 mins").unwrap(), 45);
    }

    #[test]
    fn test_range_takes_upper_bound() {
        assert_eq!(parse_duration("20 mins - 40 mins").unwrap(), 40);
        assert_eq!(parse_duration("1 hr - 1 hr and 20 mins").unwrap(), 80);
    }

    #[test]
    fn test_unparseable_leading_token() {
        assert!(matches!(
            parse_duration("soon"),
            Err(CatalogError::DurationFormat(_))
        ));
        assert!(matches!(
            parse_duration(""),
            Err(CatalogError::DurationFormat(_))
        ));
    }

    #[test]
    fn test_combine_both_entries() {
        let times = HashMap::from([
            ("Preparation".to_string(), "10 mins".to_string()),
            ("Cooking".to_string(), "30 mins".to_string()),
        ]);
        assert_eq!(combine_duration(&times).unwrap(), 40);
    }

    #[test]
    fn test_combine_missing_entry_counts_as_zero() {
        let times = HashMap::from([("Cooking".to_string(), "25 mins".to_string())]);
        assert_eq!(combine_duration(&times).unwrap(), 25);

        assert_eq!(combine_duration(&HashMap::new()).unwrap(), 0);
    }
}
