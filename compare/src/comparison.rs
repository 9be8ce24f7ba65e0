//! Comparison context and discrepancy reports.

use std::collections::BTreeMap;
use std::fmt;

/// What kind of disagreement a discrepancy records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscrepancyKind {
    /// Leaf values differ beyond tolerance.
    Value,
    /// Sequences differ in length; elements were not compared.
    LengthMismatch,
    /// Key present in actual but not in expected.
    UnexpectedEntry,
    /// Key present in expected but not in actual.
    MissingEntry,
    /// One side is present and the other absent.
    ShapeMismatch,
}

/// One path where the two trees disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Discrepancy {
    /// Dotted path from the root, e.g. `mix_effects.0.keyers.1.chroma.hue`.
    pub path: String,
    pub expected: String,
    pub actual: String,
    pub kind: DiscrepancyKind,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiscrepancyKind::UnexpectedEntry => {
                write!(f, "{}: unexpected value present ({})", self.path, self.actual)
            }
            DiscrepancyKind::MissingEntry => {
                write!(f, "{}: expected value missing ({})", self.path, self.expected)
            }
            _ => write!(
                f,
                "{}: expected {}, actual {}",
                self.path, self.expected, self.actual
            ),
        }
    }
}

/// A record, sequence element or map value that can be compared field by field.
pub trait Compare {
    /// Reports every difference between `self` (expected) and `actual`.
    fn compare(&self, actual: &Self, cx: &mut Comparison<'_>);
}

/// Walk state for one comparison: the current path, the ignore list and
/// everything found so far.
#[derive(Debug)]
pub struct Comparison<'a> {
    ignore: &'a [&'a str],
    path: Vec<String>,
    found: Vec<Discrepancy>,
}

impl<'a> Comparison<'a> {
    #[must_use]
    pub const fn new(ignore: &'a [&'a str]) -> Self {
        Self {
            ignore,
            path: Vec::new(),
            found: Vec::new(),
        }
    }

    /// Returns the discrepancies in walk order.
    #[must_use]
    pub fn finish(self) -> Vec<Discrepancy> {
        self.found
    }

    /// Returns the dotted path of the node being compared.
    #[must_use]
    pub fn path(&self) -> String {
        self.path.join(".")
    }

    /// Runs `walk` under `segment` unless that path is ignored.
    pub fn enter(&mut self, segment: &str, walk: impl FnOnce(&mut Self)) {
        self.path.push(segment.to_owned());
        let path = self.path();
        if !self.ignore.contains(&path.as_str()) {
            walk(self);
        }
        self.path.pop();
    }

    /// Records a discrepancy at the current path.
    pub fn report(&mut self, expected: impl fmt::Debug, actual: impl fmt::Debug, kind: DiscrepancyKind) {
        let path = self.path();
        self.found.push(Discrepancy {
            path,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
            kind,
        });
    }

    /// Scalars and enums: exact equality.
    pub fn exact<T: PartialEq + fmt::Debug>(&mut self, field: &str, expected: &T, actual: &T) {
        if expected != actual {
            self.enter(field, |cx| cx.report(expected, actual, DiscrepancyKind::Value));
        }
    }

    /// Floats without a tolerance. Two NaNs are equal.
    pub fn float(&mut self, field: &str, expected: &f64, actual: &f64) {
        self.within(field, expected, actual, 0.0);
    }

    /// Floats equal within an absolute tolerance.
    pub fn within(&mut self, field: &str, expected: &f64, actual: &f64, tolerance: f64) {
        if float_matches(*expected, *actual, tolerance) {
            return;
        }
        self.enter(field, |cx| cx.report(expected, actual, DiscrepancyKind::Value));
    }

    /// Angles equal within `tolerance` along the shorter arc, so values on
    /// either side of the wrap point (359.99 and 0.0) can match.
    pub fn angle(&mut self, field: &str, expected: &f64, actual: &f64, period: f64, tolerance: f64) {
        if float_matches(*expected, *actual, tolerance)
            || circular_distance(*expected, *actual, period) <= tolerance
        {
            return;
        }
        self.enter(field, |cx| cx.report(expected, actual, DiscrepancyKind::Value));
    }

    /// Integers without slack.
    pub fn integer<T: Copy + Into<i64> + fmt::Debug>(&mut self, field: &str, expected: &T, actual: &T) {
        self.slack(field, expected, actual, 0);
    }

    /// Integers (counters) equal within `slack` units.
    pub fn slack<T: Copy + Into<i64> + fmt::Debug>(
        &mut self,
        field: &str,
        expected: &T,
        actual: &T,
        slack: u64,
    ) {
        let wide_expected: i64 = (*expected).into();
        let wide_actual: i64 = (*actual).into();
        if wide_expected.abs_diff(wide_actual) > slack {
            self.enter(field, |cx| cx.report(expected, actual, DiscrepancyKind::Value));
        }
    }

    /// Byte strings: full equality.
    pub fn bytes(&mut self, field: &str, expected: &[u8], actual: &[u8]) {
        if expected != actual {
            self.enter(field, |cx| {
                cx.report(hex(expected), hex(actual), DiscrepancyKind::Value);
            });
        }
    }

    /// Nested record.
    pub fn record<T: Compare>(&mut self, field: &str, expected: &T, actual: &T) {
        self.enter(field, |cx| expected.compare(actual, cx));
    }

    /// Ordered sequence. A length mismatch is reported once and the
    /// elements are not compared.
    pub fn sequence<T: Compare>(&mut self, field: &str, expected: &[T], actual: &[T]) {
        self.enter(field, |cx| expected.compare(actual, cx));
    }

    /// Keyed map. Entries only in `actual` are reported without recursing;
    /// entries only in `expected` are reported as missing.
    pub fn map<K, V>(&mut self, field: &str, expected: &BTreeMap<K, V>, actual: &BTreeMap<K, V>)
    where
        K: Ord + fmt::Display,
        V: Compare + fmt::Debug,
    {
        self.enter(field, |cx| expected.compare(actual, cx));
    }

    /// Optional node: both absent is equal, both present recurses.
    pub fn optional<T: Compare>(&mut self, field: &str, expected: &Option<T>, actual: &Option<T>) {
        self.enter(field, |cx| match (expected, actual) {
            (Some(expected), Some(actual)) => expected.compare(actual, cx),
            (None, None) => {}
            (Some(_), None) => cx.report(PRESENT, ABSENT, DiscrepancyKind::ShapeMismatch),
            (None, Some(_)) => cx.report(ABSENT, PRESENT, DiscrepancyKind::ShapeMismatch),
        });
    }
}

impl<T: Compare> Compare for [T] {
    fn compare(&self, actual: &Self, cx: &mut Comparison<'_>) {
        if self.len() != actual.len() {
            cx.report(self.len(), actual.len(), DiscrepancyKind::LengthMismatch);
            return;
        }
        for (index, (expected, actual)) in self.iter().zip(actual).enumerate() {
            cx.enter(&index.to_string(), |cx| expected.compare(actual, cx));
        }
    }
}

impl<T: Compare> Compare for Vec<T> {
    fn compare(&self, actual: &Self, cx: &mut Comparison<'_>) {
        self.as_slice().compare(actual.as_slice(), cx);
    }
}

impl<K: Ord + fmt::Display, V: Compare + fmt::Debug> Compare for BTreeMap<K, V> {
    fn compare(&self, actual: &Self, cx: &mut Comparison<'_>) {
        for (key, expected_value) in self {
            cx.enter(&key.to_string(), |cx| match actual.get(key) {
                Some(actual_value) => expected_value.compare(actual_value, cx),
                None => cx.report(expected_value, ABSENT, DiscrepancyKind::MissingEntry),
            });
        }
        for (key, actual_value) in actual {
            if !self.contains_key(key) {
                cx.enter(&key.to_string(), |cx| {
                    cx.report(ABSENT, actual_value, DiscrepancyKind::UnexpectedEntry);
                });
            }
        }
    }
}

fn float_matches(expected: f64, actual: f64, tolerance: f64) -> bool {
    // Covers equal infinities, which subtract to NaN.
    if expected == actual || (expected.is_nan() && actual.is_nan()) {
        return true;
    }
    (expected - actual).abs() <= tolerance
}

fn circular_distance(expected: f64, actual: f64, period: f64) -> f64 {
    let distance = (expected - actual).rem_euclid(period);
    distance.min(period - distance)
}

const ABSENT: Marker = Marker("absent");
const PRESENT: Marker = Marker("present");

/// Bare word in a report, printed without quotes.
struct Marker(&'static str);

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

fn hex(bytes: &[u8]) -> HexBytes<'_> {
    HexBytes(bytes)
}

struct HexBytes<'a>(&'a [u8]);

impl fmt::Debug for HexBytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
