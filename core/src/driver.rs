//! # Experiment Driver
//!
//! One run, start to finish: resolve the target, choose an action uniformly,
//! choose its sub-parameters, execute, report. No state survives the run and
//! nothing is retried.
//!
//! Fail-closed: if target resolution fails, the error is returned before any
//! provider call is made. Executor failures come back inside the
//! [`ExperimentResult`], never as `Err`.

use faultline_common::config::RunConfig;
use faultline_common::error::ResolutionError;
use faultline_common::experiment::{ActionKind, ExperimentResult, RuleAction};
use tracing::info;

use crate::chooser::Chooser;
use crate::executor::FaultExecutor;
use crate::registry;
use crate::resolver;

pub struct ExperimentDriver {
    executor: FaultExecutor,
}

impl ExperimentDriver {
    pub fn new(executor: FaultExecutor) -> Self {
        Self { executor }
    }

    /// Runs a single experiment pass.
    ///
    /// The target is resolved once per run even when the chosen action ends up
    /// mutating the configured security group instead of the group itself; the
    /// fail-closed gate applies to every run.
    pub async fn run(
        &self,
        cfg: &RunConfig,
        chooser: &mut dyn Chooser,
    ) -> Result<ExperimentResult, ResolutionError> {
        let target = resolver::resolve(&cfg.target)?;
        info!("resolved target group '{target}'");

        let actions = registry::catalog();
        let action = &actions[chooser.choose(actions.len())];
        info!("selected action: {}", action.kind);

        let result = match action.kind {
            ActionKind::TerminateMember => {
                self.executor.terminate_member(&target, chooser).await
            }
            ActionKind::ToggleNetworkRule => {
                let rule_action = RuleAction::ALL[chooser.choose(RuleAction::ALL.len())];
                self.executor
                    .toggle_rule(&cfg.security_group, rule_action, &cfg.rule)
                    .await
            }
        };

        Ok(result)
    }
}
