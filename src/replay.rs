use std::time::Duration;

use ackermann_events::EventLog;
use ackermann_kinematics::AckermannGeometry;
use ackermann_state::{Playback, StateError, frame_times};
use spin_sleep::SpinSleeper;
use tracing::{info, warn};

use crate::settings::{PlaybackSettings, VehicleSettings};

/// Outcome counts of one playback run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub frames: usize,
    pub skipped: usize,
}

/// Steps a fixed-rate query loop over `log` and logs each frame.
///
/// Frames whose state cannot be computed are logged and skipped; the same
/// inputs would fail again, so nothing is retried.
pub fn run(
    log: &EventLog,
    geometry: AckermannGeometry,
    playback: &PlaybackSettings,
    vehicle: &VehicleSettings,
) -> Summary {
    let sleeper = SpinSleeper::new(100_000);
    let frame_period = playback.realtime.then(|| Duration::from_secs_f64(playback.step));
    let mut session = Playback::new(log, geometry, playback.heading);
    let mut summary = Summary::default();

    info!(%geometry, heading = ?playback.heading, "Playback started");

    for t in frame_times(playback.start, playback.end, playback.step) {
        match session.step(t) {
            Ok(state) => {
                summary.frames += 1;
                info!(
                    t = format_args!("{:.2}", t),
                    x = state.x,
                    y = state.y,
                    heading_deg = format_args!("{:.2}", state.heading_deg),
                    length = vehicle.length,
                    width = vehicle.width,
                    "Pose"
                );
                info!(
                    inner_deg = format_args!("{:.2}", state.inner_angle_deg),
                    outer_deg = format_args!("{:.2}", state.outer_angle_deg),
                    radius = %state.turning_radius,
                    angular_speed = format_args!("{:.3}", state.angular_speed),
                    "Steering"
                );
            }
            Err(e @ StateError::MissingData { .. }) => {
                summary.skipped += 1;
                warn!(t, error = %e, "Skipping frame, no data yet");
            }
            Err(e) => {
                summary.skipped += 1;
                warn!(t, error = %e, "Skipping frame, sample rejected by kinematics");
            }
        }

        if let Some(period) = frame_period {
            sleeper.sleep(period);
        }
    }

    summary
}
