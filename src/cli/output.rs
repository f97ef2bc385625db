// Coloured console output for the reflection loop
//
// Lightweight stage banners for interactive runs; structured logging goes
// through `tracing` instead.

use crossterm::style::{style, Color, Stylize};

const STEP_RULE_WIDTH: usize = 50;
const FINAL_RULE_WIDTH: usize = 80;

/// Announce the current step of an iterative run.
pub fn step_tracker(step: usize, total_steps: usize) {
    let rule = "=".repeat(STEP_RULE_WIDTH);
    println!("\n{}", rule.as_str().cyan().bold());
    println!("{}", format!("STEP {step}/{total_steps}").as_str().magenta());
    println!("{}\n", rule.as_str().cyan().bold());
}

/// Print a stage title in its colour followed by the stage output.
pub fn stage(title: &str, color: Color, body: &str) {
    println!("\n\n{}\n\n{body}", style(title).with(color).bold());
}

/// Printed when the critic's stop sequence ends the loop early.
pub fn stop_notice() {
    println!(
        "\n\n{}\n",
        "Stop sequence found. Stopping the reflection loop ..."
            .red()
            .bold()
    );
}

/// Wrap the final result in a delimiter banner on standard output.
pub fn final_banner(result: &str) {
    let rule = "=".repeat(FINAL_RULE_WIDTH);
    println!("\n{rule}\nFINAL OUTPUT\n{rule}\n{result}\n");
}
