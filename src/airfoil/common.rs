use crate::errors::{AirfoilError, Result};
use serde::{Deserialize, Serialize};

/// The direction in which the closed outline is traced. Both start and end at the trailing edge
/// and pass through the leading edge at the midpoint, only the surface visited first differs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateDir {
    /// Upper surface from the trailing edge to the leading edge, then the lower surface back
    #[default]
    CounterClock,

    /// Lower surface from the trailing edge to the leading edge, then the upper surface back
    Clock,
}

fn default_tan() -> f64 {
    0.5
}

fn default_th_y_te() -> f64 {
    0.001
}

fn default_n() -> usize {
    101
}

/// The full set of options for generating a Bezier airfoil outline. Only the thickness location
/// and magnitude and the two trailing edge parameters are required, everything else has a
/// default. The record is never modified by generation, so a copy of it is a complete snapshot of
/// the parameters an outline was made from.
///
/// Serialized field names match the conventional parameter names (`TE_wedge`, `th_tan_LE`, `N`,
/// etc), and fields left out of serialized input take their default values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BezierAirfoilParams {
    /// Chordwise location of the maximum thickness, in (0, 1)
    pub x: f64,

    /// Maximum half thickness
    pub y: f64,

    /// Trailing edge wedge factor, scales the taper of the thickness towards the trailing edge
    #[serde(rename = "TE_wedge")]
    pub te_wedge: f64,

    /// Trailing edge camber angle factor
    #[serde(rename = "TE_angle")]
    pub te_angle: f64,

    /// Height of the leading edge tangent handle as a fraction of `y`
    #[serde(rename = "th_tan_LE", default = "default_tan")]
    pub th_tan_le: f64,

    /// Width of the flat region around the max thickness, as a fraction of the distance to the
    /// nearer chord end
    #[serde(default = "default_tan")]
    pub th_width: f64,

    /// Height of the trailing edge tangent handle as a fraction of `y`
    #[serde(rename = "th_tan_TE", default = "default_tan")]
    pub th_tan_te: f64,

    /// Half thickness at the trailing edge. Must be positive and different from `y`
    #[serde(rename = "th_y_TE", default = "default_th_y_te")]
    pub th_y_te: f64,

    /// Chordwise position of the camber line's trailing edge tangent handle
    #[serde(default = "default_tan")]
    pub ca_tan_x: f64,

    /// Position of the camber line's leading edge tangent handle as a fraction of `ca_tan_x`
    #[serde(rename = "ca_tan_LE", default = "default_tan")]
    pub ca_tan_le: f64,

    #[serde(default)]
    pub coordinate_dir: CoordinateDir,

    /// Number of chordwise stations per surface
    #[serde(rename = "N", default = "default_n")]
    pub n: usize,
}

impl BezierAirfoilParams {
    pub fn new(x: f64, y: f64, te_wedge: f64, te_angle: f64) -> Self {
        BezierAirfoilParams {
            x,
            y,
            te_wedge,
            te_angle,
            th_tan_le: default_tan(),
            th_width: default_tan(),
            th_tan_te: default_tan(),
            th_y_te: default_th_y_te(),
            ca_tan_x: default_tan(),
            ca_tan_le: default_tan(),
            coordinate_dir: CoordinateDir::default(),
            n: default_n(),
        }
    }

    /// Ordered names and values of the shape parameters, for reporting
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("x", self.x),
            ("y", self.y),
            ("TE_wedge", self.te_wedge),
            ("TE_angle", self.te_angle),
            ("th_tan_LE", self.th_tan_le),
            ("th_width", self.th_width),
            ("th_tan_TE", self.th_tan_te),
            ("th_y_TE", self.th_y_te),
            ("ca_tan_x", self.ca_tan_x),
            ("ca_tan_LE", self.ca_tan_le),
        ]
    }

    /// Half width of the flat region of the thickness control polygon around `x`. It is scaled by
    /// the distance from `x` to the nearer end of the chord so that the region stays on [0, 1].
    pub fn plateau_half_width(&self) -> f64 {
        if self.x > 0.5 {
            (1.0 - self.x) * self.th_width
        } else {
            self.x * self.th_width
        }
    }

    /// Checks that every parameter lies in the range where the construction is meaningful. This
    /// does not catch the degenerate combinations which make a control point undefined, those are
    /// reported when the control points are built.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.entries() {
            if !value.is_finite() {
                return Err(range(name, value, "a finite value"));
            }
        }

        if self.x <= 0.0 || self.x >= 1.0 {
            return Err(range("x", self.x, "0 < x < 1"));
        }
        if self.y <= 0.0 {
            return Err(range("y", self.y, "y > 0"));
        }
        if self.th_y_te <= 0.0 {
            return Err(range("th_y_TE", self.th_y_te, "th_y_TE > 0"));
        }
        if !(0.0..=1.0).contains(&self.th_width) {
            return Err(range("th_width", self.th_width, "0 <= th_width <= 1"));
        }
        if !(0.0..=1.0).contains(&self.ca_tan_x) {
            return Err(range("ca_tan_x", self.ca_tan_x, "0 <= ca_tan_x <= 1"));
        }
        if !(0.0..=1.0).contains(&self.ca_tan_le) {
            return Err(range("ca_tan_LE", self.ca_tan_le, "0 <= ca_tan_LE <= 1"));
        }
        if self.n < 2 {
            return Err(range("N", self.n as f64, "N >= 2"));
        }

        Ok(())
    }
}

fn range(name: &'static str, value: f64, expected: &'static str) -> AirfoilError {
    AirfoilError::Range {
        name,
        value,
        expected,
    }
}
