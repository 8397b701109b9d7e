//! Thin wrapper around the `aws` command line.
//!
//! Provider mechanics stay here; the core only ever sees the trait calls.
//! Every operation is a single `aws` invocation with `--output json` — no
//! pagination, no retries, no session handling beyond what the binary itself
//! does with its ambient credentials.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::process::Command;
use tracing::debug;

use faultline_common::error::ProviderError;
use faultline_common::experiment::NetworkRule;
use faultline_common::providers::{Compute, Firewall, Inventory};

#[derive(Clone)]
pub struct AwsCli {
    region: String,
}

impl AwsCli {
    pub fn new(region: String) -> Self {
        Self { region }
    }

    /// Runs one `aws` invocation and returns its stdout.
    ///
    /// A spawn failure means the provider is unreachable from this machine;
    /// a non-zero exit means the provider looked at the request and refused,
    /// so stderr is carried into the error as-is.
    async fn invoke(&self, args: &[&str]) -> Result<String, ProviderError> {
        debug!("aws {}", args.join(" "));

        let output = Command::new("aws")
            .args(args)
            .arg("--region")
            .arg(&self.region)
            .arg("--output")
            .arg("json")
            .output()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("failed to spawn aws cli: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ProviderError::Rejected(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeAutoScalingGroups {
    auto_scaling_groups: Vec<AutoScalingGroup>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AutoScalingGroup {
    instances: Vec<AsgInstance>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AsgInstance {
    instance_id: String,
}

fn ip_permissions(rule: &NetworkRule) -> String {
    json!([{
        "IpProtocol": rule.ip_protocol,
        "FromPort": rule.from_port,
        "ToPort": rule.to_port,
        "IpRanges": [{ "CidrIp": rule.cidr }],
    }])
    .to_string()
}

#[async_trait]
impl Inventory for AwsCli {
    async fn list_members(&self, group: &str) -> Result<Vec<String>, ProviderError> {
        let stdout = self
            .invoke(&[
                "autoscaling",
                "describe-auto-scaling-groups",
                "--auto-scaling-group-names",
                group,
            ])
            .await?;

        let parsed: DescribeAutoScalingGroups = serde_json::from_str(&stdout).map_err(|e| {
            ProviderError::Unavailable(format!("unparseable describe-auto-scaling-groups response: {e}"))
        })?;

        Ok(parsed
            .auto_scaling_groups
            .into_iter()
            .flat_map(|g| g.instances)
            .map(|i| i.instance_id)
            .collect())
    }
}

#[async_trait]
impl Compute for AwsCli {
    async fn terminate(&self, member_id: &str) -> Result<(), ProviderError> {
        self.invoke(&["ec2", "terminate-instances", "--instance-ids", member_id])
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Firewall for AwsCli {
    async fn authorize_ingress(
        &self,
        group_id: &str,
        rule: &NetworkRule,
    ) -> Result<(), ProviderError> {
        let permissions = ip_permissions(rule);
        self.invoke(&[
            "ec2",
            "authorize-security-group-ingress",
            "--group-id",
            group_id,
            "--ip-permissions",
            &permissions,
        ])
        .await?;
        Ok(())
    }

    async fn revoke_ingress(
        &self,
        group_id: &str,
        rule: &NetworkRule,
    ) -> Result<(), ProviderError> {
        let permissions = ip_permissions(rule);
        self.invoke(&[
            "ec2",
            "revoke-security-group-ingress",
            "--group-id",
            group_id,
            "--ip-permissions",
            &permissions,
        ])
        .await?;
        Ok(())
    }
}
