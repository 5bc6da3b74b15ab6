//! Lockstep traversal of multiple sequences.
//!
//! Each `for_eachN` walks its sequences position by position and hands every
//! aligned tuple to the callback, in sequence order, exactly once per tuple.
//! Iteration stops the first time any cursor is exhausted, so the shortest
//! sequence decides how many tuples are produced; a length mismatch is never
//! an error. Cursors advance left to right within a step and are not
//! advanced past the first exhausted one.

use crate::guard::{self, GuardError};

/// Check whether a sequence yields no elements.
///
/// Consumes at most one element of the sequence.
pub fn is_empty<I>(sequence: Option<I>) -> Result<bool, GuardError>
where
    I: IntoIterator,
{
    guard::not_null(sequence.as_ref(), "sequence")?;
    Ok(sequence.into_iter().flatten().next().is_none())
}

/// Walk two sequences in lockstep, invoking `action` for each aligned pair.
///
/// Both sequences must be present; an absent one fails with
/// [`GuardError::NullArgument`] naming it, before any iteration begins.
///
/// # Example
///
/// ```rust
/// use lockstep::iterate;
///
/// let mut pairs = Vec::new();
/// iterate::for_each2(Some([1, 2, 3]), Some(["a", "b"]), |n, s| {
///     pairs.push((n, s));
/// })?;
///
/// // Truncated to the shorter sequence.
/// assert_eq!(pairs, [(1, "a"), (2, "b")]);
/// # Ok::<(), lockstep::GuardError>(())
/// ```
pub fn for_each2<A, B, F>(first: Option<A>, second: Option<B>, mut action: F) -> Result<(), GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item),
{
    guard::not_null(first.as_ref(), "first")?;
    guard::not_null(second.as_ref(), "second")?;

    // The guards above guarantee Some; flattening unwraps each option into
    // the sequence's own iterator.
    let mut first = first.into_iter().flatten();
    let mut second = second.into_iter().flatten();

    loop {
        let Some(a) = first.next() else { break };
        let Some(b) = second.next() else { break };
        action(a, b);
    }
    Ok(())
}

/// Walk three sequences in lockstep, invoking `action` for each aligned
/// triple. Same truncation behavior as [`for_each2`].
pub fn for_each3<A, B, C, F>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    mut action: F,
) -> Result<(), GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item),
{
    guard::not_null(first.as_ref(), "first")?;
    guard::not_null(second.as_ref(), "second")?;
    guard::not_null(third.as_ref(), "third")?;

    let mut first = first.into_iter().flatten();
    let mut second = second.into_iter().flatten();
    let mut third = third.into_iter().flatten();

    loop {
        let Some(a) = first.next() else { break };
        let Some(b) = second.next() else { break };
        let Some(c) = third.next() else { break };
        action(a, b, c);
    }
    Ok(())
}

/// Walk four sequences in lockstep, invoking `action` for each aligned
/// quadruple. Same truncation behavior as [`for_each2`].
pub fn for_each4<A, B, C, D, F>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    fourth: Option<D>,
    mut action: F,
) -> Result<(), GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item, D::Item),
{
    guard::not_null(first.as_ref(), "first")?;
    guard::not_null(second.as_ref(), "second")?;
    guard::not_null(third.as_ref(), "third")?;
    guard::not_null(fourth.as_ref(), "fourth")?;

    let mut first = first.into_iter().flatten();
    let mut second = second.into_iter().flatten();
    let mut third = third.into_iter().flatten();
    let mut fourth = fourth.into_iter().flatten();

    loop {
        let Some(a) = first.next() else { break };
        let Some(b) = second.next() else { break };
        let Some(c) = third.next() else { break };
        let Some(d) = fourth.next() else { break };
        action(a, b, c, d);
    }
    Ok(())
}

/// Walk five sequences in lockstep, invoking `action` for each aligned
/// quintuple. Same truncation behavior as [`for_each2`].
pub fn for_each5<A, B, C, D, E, F>(
    first: Option<A>,
    second: Option<B>,
    third: Option<C>,
    fourth: Option<D>,
    fifth: Option<E>,
    mut action: F,
) -> Result<(), GuardError>
where
    A: IntoIterator,
    B: IntoIterator,
    C: IntoIterator,
    D: IntoIterator,
    E: IntoIterator,
    F: FnMut(A::Item, B::Item, C::Item, D::Item, E::Item),
{
    guard::not_null(first.as_ref(), "first")?;
    guard::not_null(second.as_ref(), "second")?;
    guard::not_null(third.as_ref(), "third")?;
    guard::not_null(fourth.as_ref(), "fourth")?;
    guard::not_null(fifth.as_ref(), "fifth")?;

    let mut first = first.into_iter().flatten();
    let mut second = second.into_iter().flatten();
    let mut third = third.into_iter().flatten();
    let mut fourth = fourth.into_iter().flatten();
    let mut fifth = fifth.into_iter().flatten();

    loop {
        let Some(a) = first.next() else { break };
        let Some(b) = second.next() else { break };
        let Some(c) = third.next() else { break };
        let Some(d) = fourth.next() else { break };
        let Some(e) = fifth.next() else { break };
        action(a, b, c, d, e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_empty_detects_empty_and_non_empty() {
        assert_eq!(is_empty(Some(Vec::<i32>::new())), Ok(true));
        assert_eq!(is_empty(Some(vec![1])), Ok(false));
    }

    #[test]
    fn is_empty_rejects_absent_sequence() {
        let err = is_empty(None::<Vec<i32>>).unwrap_err();
        assert!(matches!(err, GuardError::NullArgument { .. }));
        assert_eq!(err.parameter(), "sequence");
    }

    #[test]
    fn for_each2_visits_aligned_pairs_in_order() {
        let mut seen = Vec::new();
        for_each2(Some([1, 2, 3]), Some(["a", "b", "c"]), |n, s| {
            seen.push((n, s));
        })
        .unwrap();
        assert_eq!(seen, [(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn for_each2_truncates_to_shortest() {
        let mut seen = Vec::new();
        for_each2(Some([1, 2, 3]), Some(["a", "b"]), |n, s| {
            seen.push((n, s));
        })
        .unwrap();
        assert_eq!(seen, [(1, "a"), (2, "b")]);
    }

    #[test]
    fn for_each2_names_the_absent_sequence() {
        let err = for_each2(None::<Vec<i32>>, Some(vec![1]), |_, _| {}).unwrap_err();
        assert_eq!(err.parameter(), "first");

        let err = for_each2(Some(vec![1]), None::<Vec<i32>>, |_, _| {}).unwrap_err();
        assert_eq!(err.parameter(), "second");
    }

    #[test]
    fn for_each2_does_not_invoke_action_on_guard_failure() {
        let mut calls = 0;
        let _ = for_each2(Some(vec![1]), None::<Vec<i32>>, |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn for_each2_handles_empty_input() {
        let mut calls = 0;
        for_each2(Some(Vec::<i32>::new()), Some(vec![1, 2]), |_, _| calls += 1).unwrap();
        assert_eq!(calls, 0);
    }

    #[test]
    fn for_each2_does_not_advance_past_first_exhausted_cursor() {
        let mut pulled = 0;
        let counting = (0..2).map(|n| {
            pulled += 1;
            n
        });

        for_each2(Some([1, 2].iter()), Some(counting), |_, _| {}).unwrap();

        // Two aligned pairs, so exactly two pulls from the right cursor: the
        // left cursor is exhausted first and the right one is left alone.
        assert_eq!(pulled, 2);
    }

    #[test]
    fn for_each3_truncates_to_shortest() {
        let mut seen = Vec::new();
        for_each3(Some([1, 2, 3]), Some(["x", "y"]), Some([true, false, true]), |n, s, b| {
            seen.push((n, s, b));
        })
        .unwrap();
        assert_eq!(seen, [(1, "x", true), (2, "y", false)]);
    }

    #[test]
    fn for_each4_visits_aligned_quadruples() {
        let mut seen = Vec::new();
        for_each4(
            Some([1, 2]),
            Some(["a", "b"]),
            Some([1.0, 2.0]),
            Some([true, false]),
            |n, s, f, b| seen.push((n, s, f, b)),
        )
        .unwrap();
        assert_eq!(seen, [(1, "a", 1.0, true), (2, "b", 2.0, false)]);
    }

    #[test]
    fn for_each5_stops_at_shortest_of_five() {
        let mut calls = 0;
        for_each5(
            Some(vec![0; 4]),
            Some(vec![0; 5]),
            Some(vec![0; 3]),
            Some(vec![0; 6]),
            Some(vec![0; 2]),
            |_, _, _, _, _| calls += 1,
        )
        .unwrap();
        assert_eq!(calls, 2);
    }

    #[test]
    fn for_each5_names_the_absent_sequence() {
        let err = for_each5(
            Some(vec![1]),
            Some(vec![1]),
            Some(vec![1]),
            Some(vec![1]),
            None::<Vec<i32>>,
            |_, _, _, _, _| {},
        )
        .unwrap_err();
        assert_eq!(err.parameter(), "fifth");
    }
}
