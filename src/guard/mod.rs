//! Fail-fast argument validation.
//!
//! This module contains the guard half of the crate:
//! - Guard functions that reject invalid arguments at the API boundary
//! - The [`GuardError`] taxonomy describing why an argument was rejected
//!
//! Guards are pure pass/fail gates: on success they return `Ok(())` and leave
//! no trace; on failure they return a categorized [`GuardError`] naming the
//! offending parameter. Nothing is retained between calls, so every guard is
//! independently reentrant.

mod checks;
mod error;

pub use checks::{
    max_count, max_length, no_null_elements, non_empty, non_empty_max_length, non_empty_str,
    non_empty_str_described, not_null, not_null_described, positive, positive_id,
    positive_id_described,
};
pub use error::GuardError;
