use anyhow::Context;
use colored::*;
use tracing::warn;

use faultline_common::config::RunConfig;
use faultline_common::experiment::{NetworkRule, Outcome};
use faultline_core::chooser::{Chooser, RngChooser};
use faultline_core::driver::ExperimentDriver;
use faultline_core::executor::FaultExecutor;

use crate::adapters::aws::AwsCli;
use crate::adapters::dry_run::DryRunProvider;
use crate::commands::RunArgs;
use crate::terminal::{print, spinner};

/// Executes one experiment run and reports the outcome.
///
/// Exit-code contract: `Ok` when the experiment executed (success or no-op),
/// `Err` when the target could not be resolved or the executor reported an
/// error.
pub async fn run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = RunConfig {
        target: args.target.to_source()?,
        security_group: args.security_group.clone(),
        rule: NetworkRule {
            ip_protocol: args.protocol.clone(),
            from_port: args.from_port,
            to_port: args.to_port,
            cidr: args.cidr.clone(),
        },
    };

    let executor = build_executor(&args);
    let driver = ExperimentDriver::new(executor);

    let mut chooser: Box<dyn Chooser> = match args.seed {
        Some(seed) => Box::new(RngChooser::seeded(seed)),
        None => Box::new(RngChooser::new()),
    };

    let sp = spinner::start("running experiment...");
    let outcome = driver.run(&cfg, chooser.as_mut()).await;
    sp.finish_and_clear();

    let result = outcome.context("target resolution failed, no action was attempted")?;
    print::summary(&result);

    match result.outcome {
        Outcome::Error => anyhow::bail!("experiment finished with an error: {}", result.detail),
        _ => {
            let closing = format!(
                "Experiment Complete: {} / {}",
                result.action.to_string().bold().cyan(),
                result.outcome.to_string().bold().green()
            );
            print::centerln(&closing);
            Ok(())
        }
    }
}

fn build_executor(args: &RunArgs) -> FaultExecutor {
    if args.dry_run {
        warn!("dry run: no cloud mutation will be made");
        return FaultExecutor::new(
            Box::new(DryRunProvider),
            Box::new(DryRunProvider),
            Box::new(DryRunProvider),
        );
    }

    let aws = AwsCli::new(args.region.clone());
    FaultExecutor::new(
        Box::new(aws.clone()),
        Box::new(aws.clone()),
        Box::new(aws),
    )
}
