use std::fmt::Display;

use colored::*;
use faultline_common::experiment::{ExperimentResult, Outcome};

pub const TOTAL_WIDTH: usize = 64;

const KEY_WIDTH: usize = 8;

pub fn header(msg: &str) {
    let formatted = format!("⟦ {} ⟧", msg);
    let msg_len = formatted.chars().count();

    let dash_count = TOTAL_WIDTH.saturating_sub(msg_len);
    let left = dash_count / 2;
    let right = dash_count - left;

    let line = format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right).bright_black()
    );

    println!("{line}");
}

pub fn aligned_line<V: Display>(key: &str, value: V) {
    let dots = ".".repeat((KEY_WIDTH + 1).saturating_sub(key.len()));
    println!(
        "{} {}{}{} {}",
        ">".bright_black(),
        key.cyan(),
        dots.bright_black(),
        ":".bright_black(),
        value
    );
}

pub fn tree_head(idx: usize, name: &str) {
    println!(
        "{} {}",
        format!("[{idx}]").bright_black(),
        name.bright_green()
    );
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width = key_value_pair
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last = i + 1 == key_value_pair.len();
        let branch = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        println!(
            " {} {}{}{} {}",
            branch,
            key,
            ".".repeat(key_width.saturating_sub(key.len()) + 1)
                .bright_black(),
            ":".bright_black(),
            value
        );
    }
}

pub fn centerln(msg: &str) {
    let width = console::measure_text_width(msg);
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(width) / 2);
    println!("{space}{msg}");
}

/// The one human-readable summary block every run ends with.
pub fn summary(result: &ExperimentResult) {
    let outcome = match result.outcome {
        Outcome::Success => result.outcome.to_string().green().bold(),
        Outcome::NoOp => result.outcome.to_string().yellow().bold(),
        Outcome::Error => result.outcome.to_string().red().bold(),
    };

    aligned_line("action", result.action.to_string().cyan());
    aligned_line("subject", result.subject.normal());
    aligned_line("outcome", outcome);
    aligned_line("detail", result.detail.normal());
}
