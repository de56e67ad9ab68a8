use crate::airfoil::common::BezierAirfoilParams;
use crate::airfoil::control_points::{camber_control_points, thickness_control_points};
use crate::airfoil::{Airfoil, CamberStation};
use crate::algorithms::cosine_spacing;
use crate::errors::{AirfoilError, Result};
use crate::geometry::curve2::BezierCurve2;
use crate::geometry::resample::resample_on_x;
use itertools::izip;
use ncollide2d::na::Point2;

/// An AirfoilGenerator is an entity which can produce the half thickness and the camber line
/// offset of an airfoil at a set of chordwise positions running from 0.0 (leading edge) to 1.0
/// (trailing edge). This is enough to build both surfaces.
pub trait AirfoilGenerator {
    /// Half thickness, measured from the camber line, at each of the given chord fractions
    fn thickness_on(&self, x_vec: &[f64]) -> Vec<f64>;

    /// Camber line offset from the chord at each of the given chord fractions
    fn camber_on(&self, x_vec: &[f64]) -> Vec<f64>;

    fn stations(&self, x_vec: &[f64]) -> Vec<CamberStation> {
        let thickness = self.thickness_on(x_vec);
        let camber = self.camber_on(x_vec);

        izip!(x_vec, &thickness, &camber)
            .map(|(x, t, c)| {
                CamberStation::new(
                    Point2::new(*x, *c),
                    Point2::new(*x, t + c),
                    Point2::new(*x, -t + c),
                )
            })
            .collect()
    }

    /// Generates the airfoil at `n` cosine spaced stations, which places more of them near the
    /// leading and trailing edges where the surface curvature is highest.
    fn generate(&self, n: usize) -> Result<Airfoil> {
        if n < 2 {
            return Err(AirfoilError::Range {
                name: "N",
                value: n as f64,
                expected: "N >= 2",
            });
        }

        let x_vec = cosine_spacing(n);
        Ok(Airfoil::from_stations(&self.stations(&x_vec)))
    }
}

/// An airfoil whose thickness distribution and camber line are each a single Bezier curve built
/// from a small set of shape parameters. The thickness curve has six control points and the
/// camber curve has four.
#[derive(Clone, Debug)]
pub struct BezierAirfoil {
    params: BezierAirfoilParams,
    thickness: BezierCurve2,
    camber: BezierCurve2,
}

impl BezierAirfoil {
    /// Validates the parameters and builds both curves. Parameters out of range are rejected
    /// before anything is built, then any combination which leaves a control point undefined is
    /// rejected while building.
    pub fn new(params: &BezierAirfoilParams) -> Result<BezierAirfoil> {
        params.validate()?;

        let th_cp = thickness_control_points(params)?;
        let ca_cp = camber_control_points(params)?;
        log::debug!("thickness control points: {:?}", th_cp);
        log::debug!("camber control points: {:?}", ca_cp);

        Ok(BezierAirfoil {
            params: params.clone(),
            thickness: BezierCurve2::from_points(&th_cp)?,
            camber: BezierCurve2::from_points(&ca_cp)?,
        })
    }

    pub fn params(&self) -> &BezierAirfoilParams {
        &self.params
    }

    pub fn thickness_curve(&self) -> &BezierCurve2 {
        &self.thickness
    }

    pub fn camber_curve(&self) -> &BezierCurve2 {
        &self.camber
    }

    pub fn thickness_control_points(&self) -> &[Point2<f64>] {
        self.thickness.control_points()
    }

    pub fn camber_control_points(&self) -> &[Point2<f64>] {
        self.camber.control_points()
    }

    /// The airfoil sampled at the configured number of stations
    pub fn airfoil(&self) -> Result<Airfoil> {
        self.generate(self.params.n)
    }

    /// The closed outline of `2N - 1` points, traced in the configured direction
    pub fn outline(&self) -> Result<Vec<Point2<f64>>> {
        let outline = self.airfoil()?.to_outer_contour(self.params.coordinate_dir);
        log::debug!(
            "generated outline with {} points ({:?})",
            outline.len(),
            self.params.coordinate_dir
        );
        Ok(outline)
    }
}

impl AirfoilGenerator for BezierAirfoil {
    fn thickness_on(&self, x_vec: &[f64]) -> Vec<f64> {
        resample_on_x(&self.thickness, x_vec)
    }

    fn camber_on(&self, x_vec: &[f64]) -> Vec<f64> {
        resample_on_x(&self.camber, x_vec)
    }
}

/// Generates the closed outline of a Bezier airfoil, starting and ending at the trailing edge
/// with the leading edge at index `N - 1`.
pub fn generate_outline(params: &BezierAirfoilParams) -> Result<Vec<Point2<f64>>> {
    BezierAirfoil::new(params)?.outline()
}

/// Same as `generate_outline`, but also returns a snapshot of every parameter the outline was
/// generated from. Generating again from the snapshot reproduces the outline exactly.
pub fn generate_outline_with_params(
    params: &BezierAirfoilParams,
) -> Result<(Vec<Point2<f64>>, BezierAirfoilParams)> {
    let airfoil = BezierAirfoil::new(params)?;
    let outline = airfoil.outline()?;
    Ok((outline, airfoil.params().clone()))
}
