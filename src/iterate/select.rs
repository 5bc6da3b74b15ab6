//! Lockstep traversal that collects a transformed result sequence.
//!
//! Each `mapN` delegates to the matching `for_eachN` with a collecting
//! closure, so truncation and ordering behavior is identical between the two
//! families by construction.

use super::lockstep::{for_each2, for_each3, for_each4, for_each5};
use crate::guard::GuardError;

/// Walk two sequences in lockstep, collecting `selector`'s result for each
/// aligned pair.
///
/// # Example
///
/// ```rust
/// use lockstep::iterate;
///
/// let pairs = iterate::map2(Some([1, 2, 3]), Some(["a", "b"]), |n, s| (n, s))?;
/// assert_eq!(pairs, [(1, "a"), (2, "b")]);
/// # Ok::<(), lockstep::GuardError>(())
/// ```
pub fn map2<A, B, F, R>(first: Option<A>, second: Option<B>, mut selector: F) -> Result<Vec<R>, GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> R,
{
    let mut results = Vec::new();
    for_each2(first, second, |a, b| results.push(selector(a, b)))?;
    Ok(results)
}

/// Walk three sequences in lockstep, collecting `selector`'s result for each
/// aligned triple. Same truncation behavior as [`map2`].
pub fn map3<A, B, C, F, R>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    mut selector: F,
) -> Result<Vec<R>, GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item) -> R,
{
    let mut results = Vec::new();
    for_each3(first, second, third, |a, b, c| results.push(selector(a, b, c)))?;
    Ok(results)
}

/// Walk four sequences in lockstep, collecting `selector`'s result for each
/// aligned quadruple. Same truncation behavior as [`map2`].
pub fn map4<A, B, C, D, F, R>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    fourth: Option<D>,
    mut selector: F,
) -> Result<Vec<R>, GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item, D::Item) -> R,
{
    let mut results = Vec::new();
    for_each4(first, second, third, fourth, |a, b, c, d| {
        results.push(selector(a, b, c, d))
    })?;
    Ok(results)
}

/// Walk five sequences in lockstep, collecting `selector`'s result for each
/// aligned quintuple. Same truncation behavior as [`map2`].
pub fn map5<A, B, C, D, E, F, R>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    fourth: Option<D>,
    fifth: Option<E>,
    mut selector: F,
) -> Result<Vec<R>, GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    E: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item, D::Item, E::Item) -> R,
{
    let mut results = Vec::new();
    for_each5(first, second, third, fourth, fifth, |a, b, c, d, e| {
        results.push(selector(a, b, c, d, e))
    })?;
    Ok(results)
}
