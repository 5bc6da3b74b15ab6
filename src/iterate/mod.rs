//! Lockstep iteration over 2 to 5 sequences.
//!
//! This module contains the iteration half of the crate:
//! - `for_each2`..`for_each5`: invoke a callback per aligned tuple
//! - `map2`..`map5`: collect a selector's results into a new sequence
//! - [`is_empty`]: probe whether a sequence yields anything at all
//!
//! All helpers validate their sequence inputs through the guard module
//! before touching them, truncate to the shortest sequence, and hold no
//! state beyond the duration of one call. "Lockstep" means synchronized
//! single-threaded advancement, not concurrent execution.

mod lockstep;
mod select;

pub use lockstep::{for_each2, for_each3, for_each4, for_each5, is_empty};
pub use select::{map2, map3, map4, map5};
