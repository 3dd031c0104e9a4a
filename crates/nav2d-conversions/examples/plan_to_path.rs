use core::f64::consts::FRAC_PI_2;
use nav2d_conversions::*;

fn main() {
    let stamp = Time::new(1_700_000_000, 0);
    let plan = Path2D::new(
        Header::new("map", stamp),
        vec![
            Pose2D::new(0.0, 0.0, 0.0),
            Pose2D::new(1.0, 0.0, FRAC_PI_2),
            Pose2D::new(1.0, 1.0, FRAC_PI_2),
        ],
    );

    println!("Planar plan: {}", plan);
    for pose in &plan.poses {
        println!("  {}", pose);
    }

    let path = path_2d_to_path(&plan);
    println!("\nSpatial path: {}", path);
    for pose in &path.poses {
        println!("  {}", pose);
    }

    let back = path_to_path_2d(&path);
    println!("\nProjected back: {}", back);
    for (original, recovered) in plan.poses.iter().zip(&back.poses) {
        println!("  {} -> {}", original, recovered);
    }

    let cmd_vel = Twist2D::new(0.5, 0.0, 0.2);
    println!("\nCommand {} -> {}", cmd_vel, twist_2d_to_twist(&cmd_vel));
}
