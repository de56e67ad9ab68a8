use crate::errors::{AirfoilError, Result};
use ncollide2d::na::Point2;

/// A ParametricCurve2 is a 2 dimensional curve which can be evaluated at a parameter `s` running
/// from 0.0 at its start to 1.0 at its end.
pub trait ParametricCurve2 {
    /// Return the point on the curve at the parameter `s`
    fn evaluate(&self, s: f64) -> Point2<f64>;

    /// Evaluate the curve at each of a batch of parameter values, in order
    fn evaluate_multi(&self, s: &[f64]) -> Vec<Point2<f64>> {
        s.iter().map(|v| self.evaluate(*v)).collect()
    }
}

/// A Bezier curve of arbitrary degree defined by an ordered set of control points. The curve
/// starts at the first control point and ends at the last one, the interior points shape it but
/// in general do not lie on it.
#[derive(Clone, Debug)]
pub struct BezierCurve2 {
    control_points: Vec<Point2<f64>>,
}

impl BezierCurve2 {
    /// Create a Bezier curve of degree `points.len() - 1`. At least two control points are
    /// required.
    pub fn from_points(points: &[Point2<f64>]) -> Result<Self> {
        if points.len() < 2 {
            return Err(AirfoilError::InvalidGeometry(format!(
                "a Bezier curve needs at least 2 control points, {} given",
                points.len()
            )));
        }

        Ok(BezierCurve2 {
            control_points: points.to_vec(),
        })
    }

    pub fn control_points(&self) -> &[Point2<f64>] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// De Casteljau evaluation using `work` as scratch space, so that batch evaluation only
    /// allocates once.
    fn de_casteljau(&self, s: f64, work: &mut Vec<Point2<f64>>) -> Point2<f64> {
        work.clear();
        work.extend_from_slice(&self.control_points);

        // Weighted form so that s = 0.0 and s = 1.0 reproduce the end points exactly
        let r = 1.0 - s;
        for k in (1..work.len()).rev() {
            for i in 0..k {
                work[i] = Point2::from(work[i].coords * r + work[i + 1].coords * s);
            }
        }

        work[0]
    }
}

impl ParametricCurve2 for BezierCurve2 {
    fn evaluate(&self, s: f64) -> Point2<f64> {
        let mut work = Vec::with_capacity(self.control_points.len());
        self.de_casteljau(s, &mut work)
    }

    fn evaluate_multi(&self, s: &[f64]) -> Vec<Point2<f64>> {
        let mut work = Vec::with_capacity(self.control_points.len());
        s.iter().map(|v| self.de_casteljau(*v, &mut work)).collect()
    }
}
