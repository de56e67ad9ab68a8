use bezier_airfoil::{generate_outline_with_params, BezierAirfoil, BezierAirfoilParams};
use ncollide2d::na::Point2;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let params = BezierAirfoilParams::new(0.1, 0.1, 0.5, 0.5);
    let airfoil = BezierAirfoil::new(&params)?;
    let (outline, snapshot) = generate_outline_with_params(&params)?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    for (name, value) in snapshot.entries() {
        println!("# {:>10} = {}", name, value);
    }

    print_points("thickness control points", airfoil.thickness_control_points());
    print_points("camber control points", airfoil.camber_control_points());
    print_points("outline", &outline);

    Ok(())
}

fn print_points(title: &str, v: &[Point2<f64>]) {
    println!("# {} ({})", title, v.len());
    for p in v.iter() {
        println!("{}, {}", &p.x, &p.y);
    }
}
