use ackermann_kinematics::*;

fn main() {
    let wheelbase = 4.0;
    let track_width = 2.0;
    let velocity = 2.0; // m/s
    let geometry_result = AckermannGeometry::new(wheelbase, track_width);

    match geometry_result {
        Ok(geometry) => {
            println!("Sweeping steering angles...");
            println!("  Past ±90° the turn direction follows wheelbase / tan(δ), so it flips.");
            println!("  Ackermann Parameters:");
            println!("    Wheelbase:   {} m", geometry.wheelbase());
            println!("    Track Width: {} m", geometry.track_width());
            println!("    Velocity:    {} m/s", velocity);
            println!();

            for step in -12..=12 {
                let steering_angle = step as f64 * 10.0;
                let wheels = geometry.steering_geometry(steering_angle);
                let motion = geometry.turning_dynamics(steering_angle, velocity);
                match (wheels, motion) {
                    (Ok(wheels), Ok(motion)) => {
                        println!("δ = {:>6.1}°: wheels {} motion {}", steering_angle, wheels, motion);
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        println!("δ = {:>6.1}°: {}", steering_angle, e);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize kinematics: {:?}", e);
            eprintln!("Please ensure wheelbase ({}) and track_width ({}) are positive.", wheelbase, track_width);
        }
    }
}
