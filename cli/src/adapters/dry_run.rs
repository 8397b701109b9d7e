//! Stand-in provider for `--dry-run`: logs what would happen, touches nothing.

use async_trait::async_trait;
use tracing::info;

use faultline_common::error::ProviderError;
use faultline_common::experiment::NetworkRule;
use faultline_common::providers::{Compute, Firewall, Inventory};

pub struct DryRunProvider;

#[async_trait]
impl Inventory for DryRunProvider {
    async fn list_members(&self, group: &str) -> Result<Vec<String>, ProviderError> {
        // One synthetic member keeps the terminate path exercisable offline.
        info!("dry run: pretending group '{group}' has one member");
        Ok(vec!["i-dryrun0000000000".to_string()])
    }
}

#[async_trait]
impl Compute for DryRunProvider {
    async fn terminate(&self, member_id: &str) -> Result<(), ProviderError> {
        info!("dry run: would terminate instance {member_id}");
        Ok(())
    }
}

#[async_trait]
impl Firewall for DryRunProvider {
    async fn authorize_ingress(
        &self,
        group_id: &str,
        rule: &NetworkRule,
    ) -> Result<(), ProviderError> {
        info!("dry run: would add rule [{rule}] to {group_id}");
        Ok(())
    }

    async fn revoke_ingress(
        &self,
        group_id: &str,
        rule: &NetworkRule,
    ) -> Result<(), ProviderError> {
        info!("dry run: would remove rule [{rule}] from {group_id}");
        Ok(())
    }
}
