//! Approach Signal Walkthrough
//!
//! This example drives one approach through its mode cycle and toggles
//! the movements each mode controls, printing every phase write.
//!
//! Key concepts:
//! - Mode cycling against a geometry snapshot
//! - Slaved movements following the through light
//! - Both phase slots written on every sync
//!
//! Run with: cargo run --example approach_cycle

use approach_signal::core::{ApproachId, ApproachKey, Egress, JunctionId};
use approach_signal::signal::{Detached, PhaseSlot, VisualSink};
use approach_signal::{resolve_pedestrian_state, ApproachSignal, LightColor, Mode, Result};

struct PrintSink;

impl VisualSink for PrintSink {
    fn write_phase(
        &mut self,
        junction: JunctionId,
        approach: ApproachId,
        slot: PhaseSlot,
        vehicle: LightColor,
        pedestrian: LightColor,
    ) -> Result<()> {
        println!(
            "    write junction={} approach={} slot={} vehicle={} pedestrian={}",
            junction.0, approach.0, slot, vehicle, pedestrian
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Approach Signal ===\n");

    let mut sink = PrintSink;
    let geometry = Egress::new(true, true, true);
    let mut frame = 0;

    println!("Creating an all-red approach (initial sync):");
    let mut signal =
        ApproachSignal::new_uniform(ApproachKey::new(12, 7), LightColor::Red, Detached, &mut sink, frame)?;
    println!("  {}\n", signal);

    println!("Simple mode: through carries left and right");
    frame += 256;
    signal.toggle_through(&mut sink, frame)?;
    println!("  {}\n", signal);

    signal.cycle_mode(&geometry)?;
    println!("Cycled to {}: left is independent", signal.mode());
    frame += 256;
    signal.toggle_left(&mut sink, frame)?;
    println!("  {}\n", signal);

    signal.cycle_mode(&geometry)?;
    println!("Cycled to {}: right is independent", signal.mode());
    if let Err(err) = signal.toggle_left(&mut sink, frame) {
        println!("  toggle_left rejected: {}", err);
    }
    frame += 256;
    signal.toggle_right(&mut sink, frame)?;
    println!("  {}\n", signal);

    signal.cycle_mode(&geometry)?;
    assert_eq!(signal.mode(), Mode::All);
    println!("Cycled to {}: every movement is independent", signal.mode());
    signal.set_color(approach_signal::Movement::Left, LightColor::GreenToRed);
    println!("  {}", signal);
    signal.force_settle();
    println!("  after settle: {}", signal);
    frame += 256;
    signal.sync_visuals(&mut sink, frame)?;

    let vehicle = signal.resolve_aggregate_vehicle_state();
    println!(
        "\nAggregate vehicle state: {} (pedestrians: {})",
        vehicle,
        resolve_pedestrian_state(vehicle)
    );

    signal.force_all_red();
    println!("Forced all red: {}", signal);

    println!("\n=== Example Complete ===");
    Ok(())
}
