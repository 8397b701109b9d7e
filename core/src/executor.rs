//! # Fault Executor
//!
//! Applies exactly one mutation per call and reports how it went.
//!
//! Provider handles are injected at construction so the executor never touches
//! ambient cloud state. Failures are wrapped into the [`ExperimentResult`]
//! rather than propagated: a failed mutation is a reportable outcome of the
//! experiment, not a crash. Nothing is retried and nothing is verified by
//! read-back.

use faultline_common::experiment::{ActionKind, ExperimentResult, NetworkRule, RuleAction};
use faultline_common::providers::{Compute, Firewall, Inventory};
use tracing::{info, warn};

use crate::chooser::Chooser;

pub struct FaultExecutor {
    inventory: Box<dyn Inventory>,
    compute: Box<dyn Compute>,
    firewall: Box<dyn Firewall>,
}

impl FaultExecutor {
    pub fn new(
        inventory: Box<dyn Inventory>,
        compute: Box<dyn Compute>,
        firewall: Box<dyn Firewall>,
    ) -> Self {
        Self {
            inventory,
            compute,
            firewall,
        }
    }

    /// Terminates one randomly chosen member of `group`.
    ///
    /// An empty group is a no-op, not an error: there was nothing to break.
    /// Exactly one termination request is issued for a non-empty group, and a
    /// single attempt is authoritative.
    pub async fn terminate_member(&self, group: &str, chooser: &mut dyn Chooser) -> ExperimentResult {
        let members = match self.inventory.list_members(group).await {
            Ok(members) => members,
            Err(e) => {
                return ExperimentResult::error(
                    ActionKind::TerminateMember,
                    group,
                    format!("inventory query failed: {e}"),
                );
            }
        };

        if members.is_empty() {
            info!("group '{group}' has no members, nothing to terminate");
            return ExperimentResult::no_op(
                ActionKind::TerminateMember,
                group,
                "no members in group",
            );
        }

        let member = &members[chooser.choose(members.len())];
        info!("terminating instance {member} from group '{group}'");

        match self.compute.terminate(member).await {
            Ok(()) => ExperimentResult::success(
                ActionKind::TerminateMember,
                member,
                format!("terminated instance {member}"),
            ),
            Err(e) => ExperimentResult::error(
                ActionKind::TerminateMember,
                member,
                format!("termination of {member} failed: {e}"),
            ),
        }
    }

    /// Adds or removes `rule` on the fixed security group `group_id`.
    ///
    /// Conflicts reported by the provider (rule already present on add, rule
    /// missing on remove) surface as errors: the toggle is not idempotent and
    /// the resulting group state is not read back.
    pub async fn toggle_rule(
        &self,
        group_id: &str,
        action: RuleAction,
        rule: &NetworkRule,
    ) -> ExperimentResult {
        info!("{action} rule [{rule}] on security group {group_id}");

        let call = match action {
            RuleAction::Add => self.firewall.authorize_ingress(group_id, rule).await,
            RuleAction::Remove => self.firewall.revoke_ingress(group_id, rule).await,
        };

        match call {
            Ok(()) => ExperimentResult::success(
                ActionKind::ToggleNetworkRule,
                group_id,
                format!("{action} rule [{rule}]"),
            ),
            Err(e) => {
                warn!("rule toggle on {group_id} failed: {e}");
                ExperimentResult::error(
                    ActionKind::ToggleNetworkRule,
                    group_id,
                    format!("{action} rule [{rule}] failed: {e}"),
                )
            }
        }
    }
}
