//! Lockstep: fail-fast argument guards and lockstep multi-sequence iteration
//!
//! Lockstep is a thin convenience layer over plain collection iteration. It
//! provides two independent pieces:
//!
//! - **Guards**: validation functions that reject invalid arguments at the
//!   API boundary with a categorized [`GuardError`] naming the offending
//!   parameter
//! - **Lockstep iteration**: helpers that walk 2 to 5 sequences position by
//!   position, truncated to the shortest, invoking a callback or collecting
//!   a transformed result
//!
//! Everything is synchronous, stateless, and reentrant: no call retains any
//! reference after it returns, and concurrent callers never interact.
//!
//! # Example
//!
//! ```rust
//! use lockstep::{guard, iterate, GuardError};
//!
//! fn label_scores(
//!     names: Option<&[&str]>,
//!     scores: Option<&[u32]>,
//! ) -> Result<Vec<String>, GuardError> {
//!     guard::non_empty(names, "names")?;
//!     guard::non_empty(scores, "scores")?;
//!
//!     iterate::map2(names, scores, |name, score| format!("{name}: {score}"))
//! }
//!
//! let labelled = label_scores(Some(&["ada", "grace"]), Some(&[90, 87, 42]))?;
//!
//! // Truncated to the shorter input, no error for the extra score.
//! assert_eq!(labelled, ["ada: 90", "grace: 87"]);
//!
//! let missing = label_scores(None, Some(&[1]));
//! assert_eq!(missing.unwrap_err().parameter(), "names");
//! # Ok::<(), GuardError>(())
//! ```

pub mod guard;
pub mod iterate;

// Re-export the failure type, which appears in every public signature
pub use guard::GuardError;
