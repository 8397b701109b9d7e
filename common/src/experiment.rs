//! # Experiment Model
//!
//! Shared vocabulary for a fault-injection run.
//!
//! A run applies exactly one [`ActionKind`] and produces exactly one
//! [`ExperimentResult`]. Nothing here is persisted; results exist only to be
//! reported to the operator.

use std::fmt;

/// The closed set of fault actions a run can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Terminate one randomly chosen member of the target group.
    TerminateMember,
    /// Add or remove an ingress rule on the configured security group.
    ToggleNetworkRule,
}

impl ActionKind {
    /// Every action, in selection order.
    pub const ALL: [ActionKind; 2] = [ActionKind::TerminateMember, ActionKind::ToggleNetworkRule];

    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::TerminateMember => "terminate-member",
            ActionKind::ToggleNetworkRule => "toggle-network-rule",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of a network-rule toggle, chosen independently of [`ActionKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleAction {
    Add,
    Remove,
}

impl RuleAction {
    pub const ALL: [RuleAction; 2] = [RuleAction::Add, RuleAction::Remove];
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleAction::Add => f.write_str("add"),
            RuleAction::Remove => f.write_str("remove"),
        }
    }
}

/// One ingress rule, always applied to the fixed security group from the run
/// configuration, never to anything derived from the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkRule {
    pub ip_protocol: String,
    pub from_port: u16,
    pub to_port: u16,
    pub cidr: String,
}

impl fmt::Display for NetworkRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} from {}",
            self.ip_protocol, self.from_port, self.to_port, self.cidr
        )
    }
}

/// How a run ended.
///
/// `NoOp` is not a failure: it means there was nothing to break (an empty
/// target group), as opposed to a mutation that was attempted and refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NoOp,
    Error,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("success"),
            Outcome::NoOp => f.write_str("no-op"),
            Outcome::Error => f.write_str("error"),
        }
    }
}

/// Report of one run: which action ran, against what, and how it went.
#[derive(Clone, Debug)]
pub struct ExperimentResult {
    pub action: ActionKind,
    /// Member id or security-group id the action was aimed at.
    pub subject: String,
    pub outcome: Outcome,
    pub detail: String,
}

impl ExperimentResult {
    pub fn success(action: ActionKind, subject: &str, detail: String) -> Self {
        Self {
            action,
            subject: subject.to_string(),
            outcome: Outcome::Success,
            detail,
        }
    }

    pub fn no_op(action: ActionKind, subject: &str, detail: &str) -> Self {
        Self {
            action,
            subject: subject.to_string(),
            outcome: Outcome::NoOp,
            detail: detail.to_string(),
        }
    }

    pub fn error(action: ActionKind, subject: &str, detail: String) -> Self {
        Self {
            action,
            subject: subject.to_string(),
            outcome: Outcome::Error,
            detail,
        }
    }
}
