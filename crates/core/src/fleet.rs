//! Fleet domain rules: seating capacity and create-payload validation.

use crate::error::CoreError;

/// Derived seating capacity of an airplane.
///
/// Never stored; serializers call this at render time so the value can
/// not drift from `rows` and `seats_in_row`.
pub fn capacity(rows: i64, seats_in_row: i64) -> i64 {
    rows * seats_in_row
}

/// Validate that `name` is non-empty after trimming.
pub fn validate_name(name: &str, field: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}

/// Validate the seating dimensions of a new airplane.
pub fn validate_airplane_dimensions(rows: i64, seats_in_row: i64) -> Result<(), CoreError> {
    if rows < 1 {
        return Err(CoreError::Validation(
            "'rows' must be a positive integer".into(),
        ));
    }
    if seats_in_row < 1 {
        return Err(CoreError::Validation(
            "'seats_in_row' must be a positive integer".into(),
        ));
    }
    Ok(())
}

/// Validate the distance of a new route.
///
/// A route from an airport to itself is deliberately allowed; the data set
/// contains positioning flights and the schema imposes no such constraint.
pub fn validate_route_distance(distance: i64) -> Result<(), CoreError> {
    if distance < 1 {
        return Err(CoreError::Validation(
            "'distance' must be a positive integer".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_rows_times_seats() {
        assert_eq!(capacity(10, 6), 60);
        assert_eq!(capacity(1, 1), 1);
        assert_eq!(capacity(30, 9), 270);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_name("", "name").is_err());
        assert!(validate_name("   ", "name").is_err());
        assert!(validate_name("Boeing", "name").is_ok());
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(validate_airplane_dimensions(0, 6).is_err());
        assert!(validate_airplane_dimensions(10, 0).is_err());
        assert!(validate_airplane_dimensions(-1, -1).is_err());
        assert!(validate_airplane_dimensions(10, 6).is_ok());
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        assert!(validate_route_distance(0).is_err());
        assert!(validate_route_distance(-90).is_err());
        assert!(validate_route_distance(90).is_ok());
    }
}
