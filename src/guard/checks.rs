//! Guard functions for validating arguments at API boundaries.
//!
//! Every guard takes the value under inspection plus a `name` label that
//! identifies the parameter in the failure message. Guards with a
//! `_described` variant additionally accept a longer description used as the
//! message text; the short form uses the name as the description.
//!
//! Labels are always verified before the payload, so a malformed label is
//! reported even when the payload would also have failed. This keeps failure
//! messages deterministic regardless of the payload.

use super::error::GuardError;

fn verify_name(name: &str) -> Result<(), GuardError> {
    if name.is_empty() {
        return Err(GuardError::invalid("name", "name label cannot be empty"));
    }
    Ok(())
}

fn verify_description(description: &str) -> Result<(), GuardError> {
    if description.is_empty() {
        return Err(GuardError::invalid(
            "description",
            "description label cannot be empty",
        ));
    }
    Ok(())
}

/// Require that a value is present.
///
/// # Example
///
/// ```rust
/// use lockstep::guard;
///
/// let config: Option<&str> = Some("settings.toml");
/// assert!(guard::not_null(config.as_ref(), "config").is_ok());
///
/// let missing: Option<&str> = None;
/// assert!(guard::not_null(missing.as_ref(), "config").is_err());
/// ```
pub fn not_null<T: ?Sized>(value: Option<&T>, name: &str) -> Result<(), GuardError> {
    not_null_described(value, name, name)
}

/// Require that a value is present, with a custom description used in the
/// failure message.
pub fn not_null_described<T: ?Sized>(
    value: Option<&T>,
    name: &str,
    description: &str,
) -> Result<(), GuardError> {
    verify_name(name)?;
    verify_description(description)?;

    if value.is_none() {
        return Err(GuardError::null(
            name,
            format!("{description} cannot be null"),
        ));
    }
    Ok(())
}

/// Require that an integer is strictly greater than zero.
pub fn positive(value: i64, name: &str) -> Result<(), GuardError> {
    verify_name(name)?;

    if value <= 0 {
        return Err(GuardError::invalid(
            name,
            format!("{name} must be greater than zero (got {value})"),
        ));
    }
    Ok(())
}

/// Require that a sequence is present and that none of its elements is
/// absent.
///
/// # Example
///
/// ```rust
/// use lockstep::guard;
///
/// let values = [Some(1), Some(2), Some(3)];
/// assert!(guard::no_null_elements(Some(&values[..]), "values").is_ok());
///
/// let holes = [Some(1), None, Some(3)];
/// assert!(guard::no_null_elements(Some(&holes[..]), "values").is_err());
/// ```
pub fn no_null_elements<T>(values: Option<&[Option<T>]>, name: &str) -> Result<(), GuardError> {
    not_null(values, name)?;

    // not_null above guarantees Some
    for element in values.into_iter().flatten() {
        if element.is_none() {
            return Err(GuardError::null(name, format!("{name} cannot contain null")));
        }
    }
    Ok(())
}

/// Require that a string is present and non-empty.
///
/// Absence fails with [`GuardError::NullArgument`]; emptiness with
/// [`GuardError::InvalidArgument`].
pub fn non_empty_str(value: Option<&str>, name: &str) -> Result<(), GuardError> {
    non_empty_str_described(value, name, name)
}

/// Require that a string is present and non-empty, with a custom description
/// used in the failure message.
pub fn non_empty_str_described(
    value: Option<&str>,
    name: &str,
    description: &str,
) -> Result<(), GuardError> {
    verify_name(name)?;
    verify_description(description)?;

    match value {
        None => Err(GuardError::null(
            name,
            format!("{description} cannot be null"),
        )),
        Some("") => Err(GuardError::invalid(
            name,
            format!("{description} cannot be empty"),
        )),
        Some(_) => Ok(()),
    }
}

/// Require that a sequence is present and holds at least one element.
pub fn non_empty<T>(values: Option<&[T]>, name: &str) -> Result<(), GuardError> {
    verify_name(name)?;

    match values {
        None => Err(GuardError::null(name, format!("{name} cannot be null"))),
        Some([]) => Err(GuardError::invalid(name, format!("{name} cannot be empty"))),
        Some(_) => Ok(()),
    }
}

/// Require that an identifier is valid, i.e. at least 1.
///
/// Fails with [`GuardError::OutOfRange`] rather than
/// [`GuardError::InvalidArgument`]: an identifier below 1 is outside its
/// domain, not merely malformed.
pub fn positive_id(id: i64, name: &str) -> Result<(), GuardError> {
    positive_id_described(id, name, name)
}

/// Require that an identifier is at least 1, with a custom description used
/// in the failure message.
pub fn positive_id_described(id: i64, name: &str, description: &str) -> Result<(), GuardError> {
    verify_name(name)?;
    verify_description(description)?;

    if id < 1 {
        return Err(GuardError::out_of_range(
            name,
            format!("{description} must be at least 1 (got {id})"),
        ));
    }
    Ok(())
}

/// Require that a string is present and no longer than `max` characters.
pub fn max_length(value: Option<&str>, name: &str, max: usize) -> Result<(), GuardError> {
    not_null(value, name)?;

    if let Some(value) = value {
        let length = value.chars().count();
        if length > max {
            return Err(GuardError::invalid(
                name,
                format!("length of {name} exceeds {max} characters (got {length})"),
            ));
        }
    }
    Ok(())
}

/// Require that a sequence is present, non-empty, and holds at most `max`
/// elements.
pub fn max_count<T>(values: Option<&[T]>, name: &str, max: usize) -> Result<(), GuardError> {
    non_empty(values, name)?;

    if let Some(values) = values {
        let count = values.len();
        if count > max {
            return Err(GuardError::invalid(
                name,
                format!("count of {name} exceeds {max} (got {count})"),
            ));
        }
    }
    Ok(())
}

/// Require that a string is present, non-empty, and no longer than `max`
/// characters.
pub fn non_empty_max_length(value: Option<&str>, name: &str, max: usize) -> Result<(), GuardError> {
    non_empty_str(value, name)?;
    max_length(value, name, max)
}
