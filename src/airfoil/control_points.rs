use crate::airfoil::common::BezierAirfoilParams;
use crate::errors::{AirfoilError, Result};
use ncollide2d::na::Point2;

/// Relative size below which a denominator is treated as zero. The thickness rise is measured
/// against `y`, the distance from the aft shoulder to the trailing edge against the unit chord.
pub const DOMAIN_TOL: f64 = 1e-9;

fn check_finite(points: &[Point2<f64>], curve: &str) -> Result<()> {
    match points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
        Some(i) => Err(AirfoilError::Domain(format!(
            "{} control point {} is not finite",
            curve, i
        ))),
        None => Ok(()),
    }
}

/// Builds the six control points of the thickness curve: the leading edge, the leading edge
/// tangent handle, the two shoulders of the flat region around the max thickness, the trailing
/// edge tangent handle, and the trailing edge.
///
/// The trailing edge tangent handle is placed along the chord between the aft shoulder and the
/// trailing edge thickness, scaled by the wedge factor, so it is undefined when `y == th_y_te`.
pub fn thickness_control_points(params: &BezierAirfoilParams) -> Result<[Point2<f64>; 6]> {
    let x = params.x;
    let y = params.y;
    let w = params.plateau_half_width();

    let rise = y - params.th_y_te;
    if rise.abs() < DOMAIN_TOL * y.abs() {
        return Err(AirfoilError::Domain(format!(
            "the trailing edge thickness th_y_TE ({}) is equal to the max thickness y ({})",
            params.th_y_te, y
        )));
    }

    let te_handle_x = (x + w - 1.0) / rise * y * params.th_tan_te * params.te_wedge + 1.0;
    let te_handle_y = y * params.th_tan_te + params.th_y_te;

    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, y * params.th_tan_le),
        Point2::new(x - w, y),
        Point2::new(x + w, y),
        Point2::new(te_handle_x, te_handle_y),
        Point2::new(1.0, params.th_y_te),
    ];
    check_finite(&points, "thickness")?;
    Ok(points)
}

/// Builds the four control points of the camber curve. The camber line leaves the leading edge
/// flat and returns to the chord at the trailing edge, the height of the trailing edge handle sets
/// the approach angle and is normalized by the same aft shoulder position used for thickness, so
/// it is undefined when `x + w == 1`.
pub fn camber_control_points(params: &BezierAirfoilParams) -> Result<[Point2<f64>; 4]> {
    let w = params.plateau_half_width();
    let ca_tan_te = params.ca_tan_x;

    let run = params.x + w - 1.0;
    if run.abs() < DOMAIN_TOL {
        return Err(AirfoilError::Domain(format!(
            "the aft end of the thickness plateau (x + w = {}) reaches the trailing edge",
            params.x + w
        )));
    }

    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(params.ca_tan_le * ca_tan_te, 0.0),
        Point2::new(ca_tan_te, params.te_angle * params.y / run * (ca_tan_te - 1.0)),
        Point2::new(1.0, 0.0),
    ];
    check_finite(&points, "camber")?;
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn assert_points(e: &[(f64, f64)], points: &[Point2<f64>]) {
        assert_eq!(e.len(), points.len());
        for (a, b) in e.iter().zip(points.iter()) {
            assert_relative_eq!(a.0, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.1, b.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_thickness_reference() {
        let p = BezierAirfoilParams::new(0.1, 0.1, 0.5, 0.5);
        let points = thickness_control_points(&p).unwrap();
        let e = [
            (0.0, 0.0),
            (0.0, 0.05),
            (0.05, 0.1),
            (0.15, 0.1),
            (0.785353535353535, 0.051),
            (1.0, 0.001),
        ];
        assert_points(&e, &points);
    }

    #[test]
    fn test_camber_reference() {
        let p = BezierAirfoilParams::new(0.1, 0.1, 0.5, 0.5);
        let points = camber_control_points(&p).unwrap();
        let e = [(0.0, 0.0), (0.25, 0.0), (0.5, 0.0294117647058824), (1.0, 0.0)];
        assert_points(&e, &points);
    }

    #[test_case(0.3, 0.12)]
    #[test_case(0.5, 0.1)]
    #[test_case(0.7, 0.08)]
    fn test_thickness_layout(x: f64, y: f64) {
        let p = BezierAirfoilParams::new(x, y, 0.5, 0.5);
        let w = p.plateau_half_width();
        let points = thickness_control_points(&p).unwrap();

        assert_eq!(Point2::new(0.0, 0.0), points[0]);
        assert_eq!(0.0, points[1].x);
        assert_relative_eq!(x - w, points[2].x, epsilon = 1e-12);
        assert_relative_eq!(x + w, points[3].x, epsilon = 1e-12);
        assert_eq!(y, points[2].y);
        assert_eq!(y, points[3].y);
        assert_eq!(Point2::new(1.0, p.th_y_te), points[5]);

        // The handle sits between the aft shoulder and the trailing edge for moderate wedges
        assert!(points[4].x > points[3].x && points[4].x < 1.0);
    }

    #[test]
    fn test_wedge_moves_te_handle_forward() {
        let narrow = BezierAirfoilParams::new(0.3, 0.1, 0.2, 0.5);
        let wide = BezierAirfoilParams::new(0.3, 0.1, 0.8, 0.5);
        let a = thickness_control_points(&narrow).unwrap();
        let b = thickness_control_points(&wide).unwrap();
        assert!(b[4].x < a[4].x);
        assert_eq!(a[4].y, b[4].y);
    }

    #[test]
    fn test_thickness_domain_error() {
        let p = BezierAirfoilParams {
            th_y_te: 0.1,
            ..BezierAirfoilParams::new(0.3, 0.1, 0.5, 0.5)
        };
        assert!(matches!(
            thickness_control_points(&p),
            Err(AirfoilError::Domain(_))
        ));
    }

    #[test_case(0.1, 1e-11)]
    #[test_case(0.1, -1e-11)]
    #[test_case(0.05, 2e-12)]
    fn test_thickness_near_domain_error(y: f64, offset: f64) {
        // A nearly equal trailing edge thickness throws the tangent handle far off the chord
        let p = BezierAirfoilParams {
            th_y_te: y - offset,
            ..BezierAirfoilParams::new(0.3, y, 0.5, 0.5)
        };
        assert!(matches!(
            thickness_control_points(&p),
            Err(AirfoilError::Domain(_))
        ));
    }

    #[test_case(0.5)]
    #[test_case(0.75)]
    fn test_camber_domain_error(x: f64) {
        // With a full width plateau the aft shoulder lands on the trailing edge
        let p = BezierAirfoilParams {
            th_width: 1.0,
            ..BezierAirfoilParams::new(x, 0.1, 0.5, 0.5)
        };
        assert!(matches!(
            camber_control_points(&p),
            Err(AirfoilError::Domain(_))
        ));
    }

    #[test]
    fn test_symmetric_with_zero_angle() {
        let p = BezierAirfoilParams::new(0.3, 0.1, 0.5, 0.0);
        let points = camber_control_points(&p).unwrap();
        assert!(points.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_camber_tangent_positions() {
        let p = BezierAirfoilParams {
            ca_tan_x: 0.6,
            ca_tan_le: 0.25,
            ..BezierAirfoilParams::new(0.3, 0.1, 0.5, 0.5)
        };
        let points = camber_control_points(&p).unwrap();
        assert_relative_eq!(0.15, points[1].x, epsilon = 1e-12);
        assert_relative_eq!(0.6, points[2].x, epsilon = 1e-12);
    }
}
