use std::thread;
use std::time::{Duration, Instant};

use gravdrop::sim::{PanelViewport, RunConfig, SessionDriver};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Headless stand-in for the canvas presenter: drives one comparison run
/// with wall-clock frame deltas and prints the kinematic readouts.
fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(LevelFilter::INFO)
        .init();

    let config = RunConfig::new()
        .with_height(10.0)
        .with_bodies("earth", "moon")
        .with_mass(500.0);

    let mut driver = SessionDriver::new();
    let session = match driver.start(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("invalid input: {err}");
            return;
        }
    };

    for panel in session.panels() {
        match panel.weight {
            Some(weight) => info!(
                "{}: g = {} m/s², weight = {:.2} N",
                panel.label(),
                panel.gravity,
                weight
            ),
            None => info!("{}: g = {} m/s²", panel.label(), panel.gravity),
        }
    }

    // Panel geometry a canvas presenter would use for drawing
    let viewport = PanelViewport::new(400.0, 500.0, 20.0, config.drop_height);

    let mut last = Instant::now();
    let mut frame: u32 = 0;

    loop {
        let now = Instant::now();
        let raw_dt = now.duration_since(last).as_secs_f32();
        last = now;

        let result = session.tick(raw_dt);
        frame += 1;

        // Readout roughly twice a second
        if frame % 30 == 0 {
            for (panel, snap) in session.panels().iter().zip(&result.snapshots) {
                let ball = viewport.ball_center(snap.position);
                println!(
                    "{:<8} h = {:6.2} m   v = {:7.2} m/s   screen y = {:5.1}{}",
                    panel.label(),
                    snap.position,
                    snap.velocity,
                    ball.y,
                    if snap.settled { "   (settled)" } else { "" }
                );
            }
        }

        if !result.any_running {
            break;
        }

        thread::sleep(Duration::from_millis(16));
    }

    println!("--- final readouts ---");
    for (panel, snap) in session.panels().iter().zip(session.snapshots()) {
        println!(
            "{:<8} max speed {:6.2} m/s   avg speed {:6.2} m/s",
            panel.label(),
            snap.max_speed,
            snap.avg_speed
        );
    }
}
