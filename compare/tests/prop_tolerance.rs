use compare::{compare, compare_record};
use proptest::prelude::*;

#[derive(Debug)]
struct Level {
    value: f64,
}

compare_record!(Level { value: within(0.5) });

proptest! {
    #[test]
    fn prop_tolerance_boundary(base in -1.0e3f64..1.0e3, delta in -2.0f64..2.0) {
        let expected = Level { value: base };
        let actual = Level { value: base + delta };
        let found = compare(&[], &expected, &actual);
        let difference = (expected.value - actual.value).abs();
        if difference <= 0.5 {
            prop_assert!(found.is_empty());
        } else {
            prop_assert_eq!(found.len(), 1);
        }
    }
}
