// demos/circular_motion.rs
// Run with: RUST_LOG=debug cargo run --example circular_motion

use std::error::Error;
use std::thread;
use std::time::{Duration, Instant};
use rs_kinematics::apis::easy_kinematics::EasyKinematics;
use rs_kinematics::calculators::Values;
use rs_kinematics::catalogs::variables;
use rs_kinematics::motion::CircularParticle;
use rs_kinematics::simulation::{HostScheduler, Simulator};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // A host loop standing in for requestAnimationFrame, at roughly 60 fps.
    let mut simulator = Simulator::new(HostScheduler::new());
    simulator.set_particle(CircularParticle::accelerated(2.0, 1.0, 0.5)?);
    simulator.on_update(|particle, t| {
        let state = particle.state(t);
        println!(
            "t={:.3}s θ={:.3} rad ω={:.3} rad/s |v|={:.3} m/s |a|={:.3} m/s²",
            t,
            state.normalized_angle(),
            state.angular_velocity,
            state.velocity.magnitude,
            state.total_acceleration.magnitude
        );
        Ok(())
    });

    let origin = Instant::now();
    simulator.start();
    for _ in 0..30 {
        thread::sleep(Duration::from_millis(16));
        let now = origin.elapsed().as_secs_f64();
        if let Some(tick) = simulator.scheduler_mut().fire(now) {
            simulator.on_tick(tick);
        }
    }
    simulator.pause();
    println!("simulated {:.3}s, trail holds {} points", simulator.elapsed_time(), simulator.trail().count());
    simulator.destroy();

    // The same quantities from a calculator: radius from v and T, then a_c.
    let calculator = EasyKinematics::new();
    let values = Values::new()
        .with(variables::LINEAR_VELOCITY, 12.0)
        .with(variables::PERIOD, 3.0);

    let radius = calculator.resolve(variables::RADIUS, &values);
    println!("\n{} = {:?} {} ({})", radius.name(), radius.value(), radius.unit(), radius.formula());

    let values = values.with(variables::RADIUS, radius.into_result()?);
    let acceleration = calculator.resolve(variables::CENTRIPETAL_ACCELERATION, &values);
    println!(
        "{} = {:?} {} via {:?}",
        acceleration.name(),
        acceleration.value(),
        acceleration.unit(),
        acceleration.method_used()
    );
    for warning in acceleration.warnings() {
        println!("  note: {}", warning);
    }

    // A failure is a value, never a panic.
    let missing = calculator.resolve(variables::PERIOD, &Values::new());
    if let Some(error) = missing.error() {
        println!("\n{}: {}", error.kind, error.message);
        for suggestion in &error.suggestions {
            println!("  - {}", suggestion);
        }
    }

    Ok(())
}
