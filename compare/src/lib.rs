//! Tolerance-aware structural comparison of state trees.
//!
//! Two trees of the same type are walked side by side and every path where
//! they disagree is reported. Each record declares, per field, which kind of
//! comparison applies (see [`compare_record!`]):
//! - `exact` for enums, flags and other scalars
//! - `float` and `within(tolerance)` for floats
//! - `angle(period, tolerance)` for floats that wrap, measured the short way round
//! - `integer` and `slack(units)` for counters
//! - `bytes` for byte strings
//! - `record`, `sequence`, `map` and `optional` for containers
//!
//! Inputs are only borrowed. Independent comparisons share nothing and can
//! run concurrently.

mod comparison;
mod scalar;

pub use comparison::{Compare, Comparison, Discrepancy, DiscrepancyKind};

/// Compares `expected` against `actual`, skipping every path in `ignore`.
///
/// Ignore entries match dotted paths exactly and skip the whole subtree.
#[must_use]
pub fn compare<T: Compare + ?Sized>(ignore: &[&str], expected: &T, actual: &T) -> Vec<Discrepancy> {
    let mut cx = Comparison::new(ignore);
    expected.compare(actual, &mut cx);
    cx.finish()
}

/// Implements [`Compare`] for a record by listing its fields.
///
/// Every field must be listed; a missing one fails to compile.
///
/// ```
/// use compare::{compare, compare_record};
///
/// #[derive(Debug)]
/// struct Chroma {
///     hue: f64,
///     narrow: bool,
/// }
///
/// compare_record!(Chroma {
///     hue: within(0.1),
///     narrow: exact,
/// });
///
/// let expected = Chroma { hue: 123.4, narrow: true };
/// let actual = Chroma { hue: 123.45, narrow: true };
/// assert!(compare(&[], &expected, &actual).is_empty());
/// ```
///
/// Leaving a field out is rejected:
///
/// ```compile_fail
/// use compare::compare_record;
///
/// struct Chroma {
///     hue: f64,
///     narrow: bool,
/// }
///
/// compare_record!(Chroma { hue: within(0.1) });
/// ```
#[macro_export]
macro_rules! compare_record {
    ($ty:ty { $( $field:ident: $kind:ident $(($($arg:expr),+))? ),* $(,)? }) => {
        impl $crate::Compare for $ty {
            fn compare(&self, actual: &Self, cx: &mut $crate::Comparison<'_>) {
                let Self { $( $field: _ ),* } = self;
                $( cx.$kind(stringify!($field), &self.$field, &actual.$field $($(, $arg)+)?); )*
            }
        }
    };
}
