//! Run configuration, assembled once by the CLI and read-only afterwards.

use std::path::PathBuf;

use crate::experiment::NetworkRule;

/// Where the target group name comes from.
#[derive(Clone, Debug)]
pub enum TargetSource {
    /// Use the configured name as-is.
    Static(String),
    /// Scan a provisioning-output file for `key` and use its value.
    ///
    /// The file is plain text with one `key = "value"` assignment per line
    /// (quotes optional).
    OutputsFile { path: PathBuf, key: String },
}

/// Everything a single experiment run needs.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub target: TargetSource,
    /// Security group that rule toggles are applied to.
    ///
    /// Fixed at configuration time; never derived from the resolved target.
    pub security_group: String,
    /// The one rule the toggle action adds or removes.
    pub rule: NetworkRule,
}
