//! Text rendering of a world snapshot.
//!
//! Consumes the read-only [`WorldSnapshot`] and prints a compact frame:
//! agent state plus the fixed window of upcoming platforms. Never touches
//! simulation state.

use sim::WorldSnapshot;

pub fn draw(snapshot: &WorldSnapshot) {
    println!(
        "step {:>6}  status {:?}  platforms {}",
        snapshot.step,
        snapshot.status,
        snapshot.platforms.len()
    );
    println!(
        "agent  x {:7.1}  y {:7.1}  vy {:6.1}",
        snapshot.agent_position.x, snapshot.agent_position.y, snapshot.velocity_y
    );
    for (slot, platform) in snapshot.upcoming.iter().enumerate() {
        if platform.width() > 0.0 {
            println!(
                "  window[{slot}]  [{:6.1}, {:6.1}] @ y {:6.1}",
                platform.x_start, platform.x_end, platform.y
            );
        } else {
            println!("  window[{slot}]  --");
        }
    }
}
