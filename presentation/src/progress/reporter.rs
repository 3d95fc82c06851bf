//! Progress reporting for prediction runs
//!
//! Anchor collection is one sequential pass of prompts, so progress is
//! plain line output rather than progress bars.

use assess_application::PredictionProgress;
use colored::Colorize;

/// Line-based console progress for a prediction run
pub struct ConsoleProgress;

impl PredictionProgress for ConsoleProgress {
    fn on_collection_start(&self, total_anchors: usize) {
        if total_anchors == 0 {
            println!("{} {}", "->".cyan(), "No anchors to collect".bold());
            return;
        }
        println!(
            "{} {} ({} anchors)",
            "->".cyan(),
            "Collecting anchor answers".bold(),
            total_anchors
        );
    }

    fn on_anchor_resolved(&self, key: &str, skipped: bool) {
        if skipped {
            println!("  {} {} (skipped)", "x".yellow(), key);
        } else {
            println!("  {} {}", "v".green(), key);
        }
    }

    fn on_collection_complete(&self) {
        println!();
    }

    fn on_inference_complete(&self, inferred: usize, passes: usize) {
        println!(
            "{} {} ({} answers in {} passes)",
            "->".cyan(),
            "Inference".bold(),
            inferred,
            passes
        );
    }

    fn on_fill_complete(&self, defaulted: usize) {
        println!(
            "{} {} ({} answers)",
            "->".cyan(),
            "Defaults".bold(),
            defaulted
        );
    }
}
