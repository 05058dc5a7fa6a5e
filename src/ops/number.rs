//! Numeric folds over loosely typed items.
//!
//! [`sum`], [`product`] and [`average`] accept anything implementing
//! [`AsNumber`]. Items without a numeric reading (non-numeric strings,
//! NaN, containers) are left out of the arithmetic.

/// Reading an item as an `f64`.
///
/// `None` means the item has no numeric reading.
pub trait AsNumber {
    /// The numeric reading of this item.
    fn as_number(&self) -> Option<f64>;
}

macro_rules! impl_as_number_lossless {
    ($($type:ty),* $(,)?) => {
        $(
            impl AsNumber for $type {
                fn as_number(&self) -> Option<f64> {
                    Some(f64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_as_number_wide {
    ($($type:ty),* $(,)?) => {
        $(
            impl AsNumber for $type {
                #[allow(clippy::cast_precision_loss)]
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_as_number_lossless!(i8, i16, i32, u8, u16, u32);
impl_as_number_wide!(i64, i128, isize, u64, u128, usize);

impl AsNumber for f32 {
    fn as_number(&self) -> Option<f64> {
        (!self.is_nan()).then(|| f64::from(*self))
    }
}

impl AsNumber for f64 {
    fn as_number(&self) -> Option<f64> {
        (!self.is_nan()).then_some(*self)
    }
}

impl AsNumber for bool {
    fn as_number(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

/// Blank strings read as zero; otherwise the trimmed text must parse.
impl AsNumber for str {
    fn as_number(&self) -> Option<f64> {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return Some(0.0);
        }
        trimmed.parse::<f64>().ok().filter(|number| !number.is_nan())
    }
}

impl AsNumber for String {
    fn as_number(&self) -> Option<f64> {
        self.as_str().as_number()
    }
}

/// `None` reads as zero.
impl<T: AsNumber> AsNumber for Option<T> {
    fn as_number(&self) -> Option<f64> {
        self.as_ref().map_or(Some(0.0), AsNumber::as_number)
    }
}

impl<T: AsNumber + ?Sized> AsNumber for &T {
    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }
}

/// Sum of the numeric readings; `0.0` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use seqwise::ops;
///
/// assert_eq!(ops::sum(vec![1, 2, 3]), 6.0);
/// assert_eq!(ops::sum(vec!["1.5", "x", " 2 "]), 3.5);
/// ```
pub fn sum<S>(source: S) -> f64
where
    S: IntoIterator,
    S::Item: AsNumber,
{
    source
        .into_iter()
        .filter_map(|item| item.as_number())
        .sum()
}

/// Product of the numeric readings; `1.0` for an empty sequence.
pub fn product<S>(source: S) -> f64
where
    S: IntoIterator,
    S::Item: AsNumber,
{
    source
        .into_iter()
        .filter_map(|item| item.as_number())
        .product()
}

/// Sum of the numeric readings divided by the number of items.
///
/// Every item counts toward the denominator, including those without a
/// numeric reading. An empty sequence yields NaN.
///
/// ```rust
/// use seqwise::ops;
///
/// assert_eq!(ops::average(vec![2, 4, 6]), 4.0);
/// assert_eq!(ops::average(vec!["4", "n/a"]), 2.0);
/// assert!(ops::average(Vec::<i32>::new()).is_nan());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average<S>(source: S) -> f64
where
    S: IntoIterator,
    S::Item: AsNumber,
{
    let (total, count) = source.into_iter().fold((0.0, 0_usize), |(total, count), item| {
        (total + item.as_number().unwrap_or(0.0), count + 1)
    });
    if count == 0 {
        f64::NAN
    } else {
        total / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("42", Some(42.0))]
    #[case("  -1.5 ", Some(-1.5))]
    #[case("", Some(0.0))]
    #[case("   ", Some(0.0))]
    #[case("abc", None)]
    #[case("NaN", None)]
    fn test_str_as_number(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(text.as_number(), expected);
    }

    #[test]
    fn test_scalar_readings() {
        assert_eq!(true.as_number(), Some(1.0));
        assert_eq!(f64::NAN.as_number(), None);
        assert_eq!(None::<i32>.as_number(), Some(0.0));
        assert_eq!(Some(3_u8).as_number(), Some(3.0));
    }

    #[test]
    fn test_sum_and_product_empty() {
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
        assert_eq!(product(Vec::<f64>::new()), 1.0);
    }

    #[test]
    fn test_product_skips_non_numeric() {
        assert_eq!(product(vec!["2", "three", "4"]), 8.0);
    }

    #[test]
    fn test_average_counts_every_item() {
        assert_eq!(average(vec![f64::NAN, 3.0]), 1.5);
        assert_eq!(average(vec![Some(4), None]), 2.0);
    }
}
