use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct PointEntry(#[serde(with = "Point2f64")] Point2<f64>);

/// Serializes a sequence of points as a list of `{"x": .., "y": ..}` objects. Intended for use with
/// `#[serde(serialize_with = "...")]` on point containers.
pub fn points2<S: Serializer>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter().map(|p| PointEntry(*p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "points2")]
        points: Vec<Point2<f64>>,
    }

    #[test]
    fn test_serialize_points() {
        let w = Wrapper {
            points: vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.5)],
        };
        let text = serde_json::to_string(&w).unwrap();
        assert_eq!(
            r#"{"points":[{"x":0.0,"y":0.0},{"x":1.0,"y":0.5}]}"#,
            text
        );
    }
}
