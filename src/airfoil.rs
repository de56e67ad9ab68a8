use crate::serialize::points2;
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod common;
pub mod control_points;
pub mod generate;

pub use common::{BezierAirfoilParams, CoordinateDir};

/// The camber line point and the two surface points at a single chordwise station
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }
}

/// An airfoil section sampled at a common set of chordwise stations. Each of the three point
/// sequences runs from the leading edge to the trailing edge.
#[derive(Clone, Debug, Serialize)]
pub struct Airfoil {
    #[serde(serialize_with = "points2")]
    pub camber: Vec<Point2<f64>>,

    #[serde(serialize_with = "points2")]
    pub upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "points2")]
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// Joins the two surfaces into a single closed loop which starts and ends at the trailing
    /// edge. The first surface is traversed backwards from the trailing edge, the shared leading
    /// edge point appears once at the middle of the loop, and the second surface is traversed
    /// forwards back to the trailing edge.
    pub fn to_outer_contour(&self, dir: CoordinateDir) -> Vec<Point2<f64>> {
        let (first, second) = match dir {
            CoordinateDir::CounterClock => (&self.upper, &self.lower),
            CoordinateDir::Clock => (&self.lower, &self.upper),
        };

        if first.is_empty() {
            return second.to_vec();
        }

        let mut result: Vec<Point2<f64>> = first[1..].iter().rev().cloned().collect();
        result.extend_from_slice(second);
        result
    }
}
