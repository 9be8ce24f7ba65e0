//! `Compare` for leaf values, so sequences and maps of scalars work.

use crate::{Comparison, Compare, DiscrepancyKind};

macro_rules! exact_compare {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Compare for $ty {
                fn compare(&self, actual: &Self, cx: &mut Comparison<'_>) {
                    if self != actual {
                        cx.report(self, actual, DiscrepancyKind::Value);
                    }
                }
            }
        )+
    };
}

exact_compare!(bool, u8, u16, u32, u64, i8, i16, i32, i64, String);

impl Compare for f64 {
    fn compare(&self, actual: &Self, cx: &mut Comparison<'_>) {
        if self != actual && !(self.is_nan() && actual.is_nan()) {
            cx.report(self, actual, DiscrepancyKind::Value);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::compare;

    #[test]
    fn scalar_sequences_compare_by_index() {
        let found = compare(&[], &vec![1u8, 2, 3], &vec![1u8, 5, 3]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "1");
    }

    #[test]
    fn nan_equals_nan() {
        assert!(compare(&[], &f64::NAN, &f64::NAN).is_empty());
    }
}
