//! Catalog of the fault actions this tool can apply.
//!
//! The driver draws uniformly from this catalog; the CLI prints it. The set is
//! closed on purpose: adding an action means adding an [`ActionKind`] variant
//! and an entry here.

use faultline_common::experiment::ActionKind;

/// Static description of one fault action.
pub struct ActionSpec {
    pub kind: ActionKind,
    pub summary: &'static str,
    /// Configuration the action reads when it runs.
    pub params: &'static [&'static str],
}

static CATALOG: [ActionSpec; 2] = [
    ActionSpec {
        kind: ActionKind::TerminateMember,
        summary: "Terminate one randomly chosen instance of the target group",
        params: &["target group"],
    },
    ActionSpec {
        kind: ActionKind::ToggleNetworkRule,
        summary: "Add or remove an ingress rule on the configured security group",
        params: &["security group", "protocol", "port range", "CIDR"],
    },
];

/// Every available action, in selection order.
pub fn catalog() -> &'static [ActionSpec] {
    &CATALOG
}
