pub mod actions;
pub mod resolve;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use faultline_common::config::TargetSource;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(about = "A minimal fault-injection orchestrator.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one experiment against the configured target
    #[command(alias = "r")]
    Run(RunArgs),
    /// List the fault actions an experiment can pick from
    #[command(alias = "a")]
    Actions,
    /// Resolve and print the target group without running anything
    Resolve(ResolveArgs),
}

#[derive(Args)]
pub struct TargetArgs {
    /// Target autoscaling group name
    #[arg(long, conflicts_with = "outputs_file")]
    pub group: Option<String>,

    /// Provisioning-output file to resolve the group name from
    #[arg(long, required_unless_present = "group")]
    pub outputs_file: Option<PathBuf>,

    /// Key to look for in the outputs file (first line containing it wins)
    #[arg(long, default_value = "autoscaling_group_name")]
    pub output_key: String,
}

impl TargetArgs {
    pub fn to_source(&self) -> anyhow::Result<TargetSource> {
        match (&self.group, &self.outputs_file) {
            (Some(name), _) => Ok(TargetSource::Static(name.clone())),
            (None, Some(path)) => Ok(TargetSource::OutputsFile {
                path: path.clone(),
                key: self.output_key.clone(),
            }),
            (None, None) => anyhow::bail!("either --group or --outputs-file is required"),
        }
    }
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Security group that rule toggles are applied to
    #[arg(long)]
    pub security_group: String,

    /// Protocol of the toggled ingress rule
    #[arg(long, default_value = "tcp")]
    pub protocol: String,

    /// First port of the toggled rule's range
    #[arg(long, default_value_t = 80)]
    pub from_port: u16,

    /// Last port of the toggled rule's range
    #[arg(long, default_value_t = 80)]
    pub to_port: u16,

    /// Source CIDR of the toggled rule
    #[arg(long, default_value = "0.0.0.0/0")]
    pub cidr: String,

    /// Region the provider calls go to
    #[arg(long, default_value = "eu-north-1")]
    pub region: String,

    /// Seed the action selection for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log intended mutations instead of calling the cloud provider
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
