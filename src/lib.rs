//! Generation of airfoil section outlines from a compact set of shape parameters. The half
//! thickness and the camber line are each a single Bezier curve whose control points are derived
//! from the parameters. Both curves are resampled onto a cosine spaced chordwise grid and combined
//! into a closed outline which starts and ends at the trailing edge.

pub mod airfoil;
pub mod algorithms;
pub mod errors;
pub mod geometry;
pub mod serialize;

pub use airfoil::generate::{generate_outline, generate_outline_with_params, BezierAirfoil};
pub use airfoil::{BezierAirfoilParams, CoordinateDir};
pub use errors::{AirfoilError, Result};
