use colored::*;
use faultline_core::registry;

use crate::terminal::print;

/// Prints the action catalog: what each fault does and what it reads.
pub fn actions() {
    for (idx, spec) in registry::catalog().iter().enumerate() {
        print::tree_head(idx, spec.kind.name());
        print::as_tree_one_level(vec![
            ("what".to_string(), spec.summary.normal()),
            ("params".to_string(), spec.params.join(", ").normal()),
        ]);
        println!();
    }
}
