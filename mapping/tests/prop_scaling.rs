use mapping::scale::{
    decibels_to_linear, decibels_to_wire, degrees_to_fraction, fraction_to_degrees,
    fraction_to_percent, linear_to_decibels, percent_to_fraction, wire_to_decibels, wrap,
};
use mapping::{FieldCodec, WireField, WireValue};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

proptest! {
    #[test]
    fn prop_percent_roundtrip(fraction in 0.0f64..=1.0) {
        let back = percent_to_fraction(fraction_to_percent(fraction));
        prop_assert!((back - fraction).abs() < EPSILON);
    }

    #[test]
    fn prop_degrees_roundtrip(fraction in 0.0f64..=1.0) {
        let back = degrees_to_fraction(fraction_to_degrees(fraction));
        prop_assert!((back - fraction).abs() < EPSILON);
    }

    #[test]
    fn prop_decibel_roundtrip(db in -60.0f64..=6.0) {
        let back = linear_to_decibels(decibels_to_linear(db));
        prop_assert!((back - db).abs() < 1e-6);
    }

    #[test]
    fn prop_decibel_wire_within_quantization(db in -40.0f64..=6.0) {
        let back = wire_to_decibels(decibels_to_wire(db));
        prop_assert!((back - db).abs() < 0.01);
    }

    #[test]
    fn prop_wrap_stays_in_period(value in -1.0e6f64..1.0e6) {
        let wrapped = wrap(value, 360.0);
        prop_assert!((0.0..360.0).contains(&wrapped));
    }

    #[test]
    fn prop_fixed_never_leaves_bounds(value in any::<f64>()) {
        let constrained = value.constrain(FieldCodec::PERCENT);
        prop_assert!((0.0..=100.0).contains(&constrained));
    }

    #[test]
    fn prop_fixed_wire_roundtrip(tenths in 0i64..=1000) {
        let value = tenths as f64 / 10.0;
        let wire = value.to_wire(FieldCodec::PERCENT).unwrap();
        prop_assert_eq!(&wire, &WireValue::Int(tenths));
        let back = f64::from_wire(&wire, FieldCodec::PERCENT).unwrap();
        prop_assert!((back - value).abs() < EPSILON);
    }

    #[test]
    fn prop_angle_wire_in_range(value in -1.0e5f64..1.0e5) {
        match value.to_wire(FieldCodec::HUE).unwrap() {
            WireValue::Int(raw) => prop_assert!((0..3600).contains(&raw)),
            other => prop_assert!(false, "unexpected wire value {:?}", other),
        }
    }
}
