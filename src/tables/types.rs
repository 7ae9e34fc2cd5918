use std::collections::HashMap;

use crate::performance::UnitKind;

/// Shape of a combined-event curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormulaKind {
    /// `a * (b - x)^c`, lower is better
    Track,
    /// `a * (x - b)^c`, higher is better
    Field,
}

/// Power-law coefficients for one combined event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventCoefficient {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub unit: UnitKind,
    pub formula: FormulaKind,
}

impl EventCoefficient {
    pub const fn track(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            unit: UnitKind::TimeSeconds,
            formula: FormulaKind::Track,
        }
    }

    /// Jumps and vaults, calibrated in centimeters
    pub const fn jump(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            unit: UnitKind::DistanceCentimeters,
            formula: FormulaKind::Field,
        }
    }

    pub const fn throw(a: f64, b: f64, c: f64) -> Self {
        Self {
            a,
            b,
            c,
            unit: UnitKind::DistanceMeters,
            formula: FormulaKind::Field,
        }
    }
}

/// `(A, B)` pair of a competition formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCoefficients {
    pub a: f64,
    pub b: f64,
}

impl LinearCoefficients {
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// `a / t - b`, unfloored
    pub fn over_time(&self, seconds: f64) -> f64 {
        self.a / seconds - self.b
    }

    /// `a * sqrt(d) - b`, unfloored
    pub fn over_sqrt_distance(&self, meters: f64) -> f64 {
        self.a * meters.sqrt() - self.b
    }
}

/// Closed linear formula `(d - origin) * slope + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRamp {
    pub origin: f64,
    pub slope: f64,
    pub offset: f64,
}

impl LinearRamp {
    pub fn eval(&self, meters: f64) -> f64 {
        (meters - self.origin) * self.slope + self.offset
    }
}

/// Two-branch jump rule used by the youth tables.
///
/// Strictly above `threshold` the sqrt formula applies; at or below it the
/// closed ramp does. The branches are not continuous at the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseRule {
    pub threshold: f64,
    pub above: LinearCoefficients,
    pub at_or_below: LinearRamp,
}

/// How a competition field event turns meters into points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRule {
    Sqrt(LinearCoefficients),
    /// Sqrt formula on both sides of the threshold with different pairs
    SplitSqrt {
        threshold: f64,
        at_or_below: LinearCoefficients,
        above: LinearCoefficients,
    },
    Piecewise(PiecewiseRule),
}

impl FieldRule {
    pub fn threshold(&self) -> Option<f64> {
        match self {
            FieldRule::Sqrt(_) => None,
            FieldRule::SplitSqrt { threshold, .. } => Some(*threshold),
            FieldRule::Piecewise(rule) => Some(rule.threshold),
        }
    }

    /// Unfloored point value for a distance in meters
    pub fn eval(&self, meters: f64) -> f64 {
        match self {
            FieldRule::Sqrt(pair) => pair.over_sqrt_distance(meters),
            FieldRule::SplitSqrt {
                threshold,
                at_or_below,
                above,
            } => {
                if meters > *threshold {
                    above.over_sqrt_distance(meters)
                } else {
                    at_or_below.over_sqrt_distance(meters)
                }
            }
            FieldRule::Piecewise(rule) => {
                if meters > rule.threshold {
                    rule.above.over_sqrt_distance(meters)
                } else {
                    rule.at_or_below.eval(meters)
                }
            }
        }
    }
}

/// Power-law table for one combined-event category.
#[derive(Debug, Clone)]
pub struct CombinedTable {
    pub name: &'static str,
    pub events: HashMap<&'static str, EventCoefficient>,
    pub display_order: Vec<&'static str>,
}

impl CombinedTable {
    /// Build from an ordered list; the list order becomes the display order.
    pub fn from_ordered(name: &'static str, rows: &[(&'static str, EventCoefficient)]) -> Self {
        Self {
            name,
            events: rows.iter().copied().collect(),
            display_order: rows.iter().map(|(key, _)| *key).collect(),
        }
    }

    pub fn get(&self, event: &str) -> Option<&EventCoefficient> {
        self.events.get(event)
    }
}

/// Additive table for one competition category.
#[derive(Debug, Clone)]
pub struct CompetitionTable {
    pub name: &'static str,
    pub run_events: HashMap<&'static str, LinearCoefficients>,
    pub field_events: HashMap<&'static str, FieldRule>,
    pub display_order: Vec<&'static str>,
}

impl CompetitionTable {
    pub fn new(
        name: &'static str,
        run_events: &[(&'static str, LinearCoefficients)],
        field_events: &[(&'static str, FieldRule)],
        display_order: &[&'static str],
    ) -> Self {
        Self {
            name,
            run_events: run_events.iter().copied().collect(),
            field_events: field_events.iter().copied().collect(),
            display_order: display_order.to_vec(),
        }
    }

    pub fn contains(&self, event: &str) -> bool {
        self.run_events.contains_key(event) || self.field_events.contains_key(event)
    }

    /// Input unit for an event, `None` if the table does not know it
    pub fn unit(&self, event: &str) -> Option<UnitKind> {
        if self.run_events.contains_key(event) {
            Some(UnitKind::TimeSeconds)
        } else if self.field_events.contains_key(event) {
            Some(UnitKind::DistanceMeters)
        } else {
            None
        }
    }
}
