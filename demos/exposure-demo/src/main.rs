//! VIGIL Exposure Demo
//!
//! Scripted viewport session showing:
//! - Registration with a full configuration and with a bare callback
//! - Exposure measurement across ratio fluctuation
//! - Away-time correction when the viewport loses focus
//! - Automatic unregistration of once-elements

use vigil_core::{ElementId, ExposureConfig, RegisterSpec};
use vigil_test::ExposureSimulator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("╔══════════════════════════════════════════════════╗");
    println!("║        VIGIL Exposure Demo - Scripted Session    ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    let mut sim = ExposureSimulator::starting_at(1_000);

    // A banner tracked once at the default 0.75 threshold, with a
    // callback that claims the report for itself
    let banner = ElementId::new(1);
    sim.register(
        banner,
        RegisterSpec::callback(|result, _event, observer| {
            println!(
                "  [callback] banner exposed for {}ms (away {}ms, attentive {}ms) via {:?}",
                result.time.as_millis(),
                result.leave_time.as_millis(),
                result.attentive_time().as_millis(),
                observer,
            );
            true
        }),
    );

    // An article card tracked repeatedly at a looser threshold; its
    // results go through the default report action
    let card = ElementId::new(2);
    sim.register(card, ExposureConfig::new().with_ratio(0.5).with_once(false));

    println!("> user scrolls the banner and the card into view");
    sim.enter(banner, 0.9)?;
    sim.enter(card, 0.6)?;

    println!("> 2s of reading, then the user switches windows for 1.5s");
    sim.advance(2_000);
    sim.blur();
    sim.advance(1_500);
    sim.refocus();

    println!("> the card dips to a sliver while the user scrolls on");
    sim.advance(500);
    sim.dip(card, 0.1)?;

    println!("> both elements leave the viewport");
    sim.advance(1_000);
    sim.exit(banner)?;
    sim.exit(card)?;

    println!("> the card comes back for a short second look");
    sim.advance(3_000);
    sim.enter(card, 0.8)?;
    sim.advance(400);
    sim.exit(card)?;

    println!();
    println!("Reported via the default action:");
    for (target, result) in sim.results() {
        println!(
            "  element {}: dwell {}ms, away {}ms, attentive {}ms",
            target,
            result.time.as_millis(),
            result.leave_time.as_millis(),
            result.attentive_time().as_millis(),
        );
    }

    println!();
    println!(
        "banner still registered: {} (once element, auto-unregistered)",
        sim.engine().is_registered(banner)
    );
    println!("card still registered: {}", sim.engine().is_registered(card));

    Ok(())
}
