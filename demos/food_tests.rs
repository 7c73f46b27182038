//! Food Tests on the Virtual Bench
//!
//! This example walks through the four standard food tests and one unsafe
//! run, printing the lab notebook after each.
//!
//! Key concepts:
//! - Caller-owned state threaded through pure engine operations
//! - Data-driven actions via `LabAction`
//! - Safety failures that freeze the run until reset
//! - Snapshots for handing state to a presentation layer
//!
//! Run with: RUST_LOG=biolab=debug cargo run --example food_tests

use biolab::catalog::ExperimentId;
use biolab::core::{LabState, Reagent};
use biolab::engine::{HeatMethod, LabAction, LabEngine};
use biolab::snapshot::LabSnapshot;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging disabled: {e}");
    }

    println!("=== Food Tests ===\n");

    let engine = LabEngine::new();
    println!("Reagent shelf:");
    for reagent in Reagent::ALL {
        let kind = if reagent.is_sample() { "sample" } else { "reagent" };
        println!("  {:<16} {:<20} ({kind})", reagent.label(), reagent.id());
    }
    println!();

    for definition in engine.catalog().iter() {
        println!("{} ({})", definition.name, definition.id);
        for (n, step) in definition.steps.iter().enumerate() {
            println!("  {}. {}", n + 1, step);
        }
    }
    println!();

    let runs: [(&str, Vec<LabAction>); 4] = [
        (
            "Benedict's with high glucose",
            vec![
                LabAction::Select(ExperimentId::Benedicts),
                LabAction::AddReagent(Reagent::SampleGlucose),
                LabAction::AddReagent(Reagent::Benedicts),
                LabAction::Heat(HeatMethod::Bath),
            ],
        ),
        (
            "Iodine with starch",
            vec![
                LabAction::Select(ExperimentId::Iodine),
                LabAction::AddReagent(Reagent::SampleStarch),
                LabAction::AddReagent(Reagent::Iodine),
            ],
        ),
        (
            "Biuret with protein",
            vec![
                LabAction::Select(ExperimentId::Biuret),
                LabAction::AddReagent(Reagent::SampleProtein),
                LabAction::AddReagent(Reagent::BiuretA),
                LabAction::AddReagent(Reagent::BiuretB),
                LabAction::Shake,
            ],
        ),
        (
            "Ethanol emulsion with lipid",
            vec![
                LabAction::Select(ExperimentId::Ethanol),
                LabAction::AddReagent(Reagent::SampleLipid),
                LabAction::AddReagent(Reagent::Ethanol),
                LabAction::Shake,
                LabAction::AddReagent(Reagent::Water),
            ],
        ),
    ];

    let mut state = engine.toggle_goggles(engine.initial_state());
    for (title, actions) in runs {
        let from = state.messages.len();
        state = actions
            .into_iter()
            .fold(state, |s, action| engine.apply(s, action));
        print_run(title, &state, from);
    }

    let from = state.messages.len();
    state = [
        LabAction::ToggleGoggles,
        LabAction::Select(ExperimentId::Ethanol),
        LabAction::AddReagent(Reagent::SampleLipid),
        LabAction::AddReagent(Reagent::Ethanol),
        LabAction::Heat(HeatMethod::Burner),
        LabAction::Shake,
    ]
    .into_iter()
    .fold(state, |s, action| engine.apply(s, action));
    print_run("Ethanol over a Bunsen burner", &state, from);
    if let Some(reason) = state.failure_reason() {
        println!("Failure reason: {reason}\n");
    }

    match LabSnapshot::capture(&state).to_json() {
        Ok(json) => println!("Snapshot: {} bytes of JSON", json.len()),
        Err(e) => println!("Snapshot failed: {e}"),
    }
    println!(
        "Status path: {:?}",
        state
            .history
            .get_path()
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
    );

    println!("\n=== Example Complete ===");
}

fn print_run(title: &str, state: &LabState, from: usize) {
    println!("--- {title} ---");
    for entry in &state.messages.entries()[from..] {
        println!("  [{:?}] {}", entry.kind, entry.text);
    }
    let contents: Vec<_> = state.tube_contents.iter().map(|r| r.label()).collect();
    println!("Tube: {}", contents.join(", "));
    println!(
        "Status: {} | Colour: {}{}\n",
        state.status.name(),
        state.tube_color.final_value(),
        if state.tube_color.is_transition() { " (fading in)" } else { "" }
    );
}
