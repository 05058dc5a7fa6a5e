//! The `compose!` macro for building one transformer out of several.

/// Composes transformers from right to left.
///
/// `compose!(c, b, a)` is a single transformer that applies `a`, then `b`,
/// then `c`. It is built from [`chain`](crate::curried::chain) and can be
/// stored, reused and composed further.
///
/// # Laws
///
/// - **Associativity**: `compose!(a, compose!(b, c))` applies like `compose!(compose!(a, b), c)`
/// - **Identity**: `compose!(identity(), a)` and `compose!(a, identity())` apply like `a`
///
/// # Syntax
///
/// - `compose!(a)` - Returns `a` unchanged
/// - `compose!(b, a)` - Returns `chain(a, b)`
/// - `compose!(c, b, a, ...)` - Composes any number of transformers
///
/// # Examples
///
/// ```
/// use seqwise::curried::{self, Transform};
/// use seqwise::compose;
///
/// let top_three = compose!(
///     curried::take(3),
///     curried::filter(|score: &u32, _: usize| *score >= 50),
/// );
///
/// let passed: Vec<u32> = top_three.apply_to(vec![90, 40, 75, 50, 99]).collect();
/// assert_eq!(passed, vec![90, 75, 50]);
///
/// let again: Vec<u32> = top_three.apply_to(vec![10, 60]).collect();
/// assert_eq!(again, vec![60]);
/// ```
#[macro_export]
macro_rules! compose {
    ($transformer:expr $(,)?) => {
        $transformer
    };

    ($outer:expr, $($remaining:expr),+ $(,)?) => {
        $crate::curried::chain($crate::compose!($($remaining),+), $outer)
    };
}

#[cfg(test)]
mod tests {
    use crate::curried::{self, Transform, identity};

    #[test]
    fn test_compose_single() {
        let composed = compose!(curried::count());
        assert_eq!(composed.apply_to(0..3), 3);
    }

    #[test]
    fn test_compose_applies_right_first() {
        let composed = compose!(curried::take(2), curried::skip(1));
        assert_eq!(composed.apply_to(0..10).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_compose_identity_laws() {
        let plain = curried::chunk(2);
        let left = compose!(identity(), plain);
        let right = compose!(plain, identity());
        let expected: Vec<Vec<i32>> = plain.apply_to(1..=5).collect();
        assert_eq!(left.apply_to(1..=5).collect::<Vec<_>>(), expected);
        assert_eq!(right.apply_to(1..=5).collect::<Vec<_>>(), expected);
    }
}
