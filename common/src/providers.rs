//! Outbound provider ports.
//!
//! The executor only ever talks to these traits; the concrete cloud wiring
//! lives in the CLI adapters. Keeping the handles injectable is what makes the
//! core testable with recording mocks.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::experiment::NetworkRule;

/// Lists the current members of a named infrastructure group.
#[async_trait]
pub trait Inventory: Send + Sync {
    async fn list_members(&self, group: &str) -> Result<Vec<String>, ProviderError>;
}

/// Terminates a single compute instance.
#[async_trait]
pub trait Compute: Send + Sync {
    async fn terminate(&self, member_id: &str) -> Result<(), ProviderError>;
}

/// Mutates ingress rules on a security group.
///
/// Neither call is idempotent: adding a rule that already exists or removing
/// one that is absent is a provider-side conflict, reported as an error.
#[async_trait]
pub trait Firewall: Send + Sync {
    async fn authorize_ingress(
        &self,
        group_id: &str,
        rule: &NetworkRule,
    ) -> Result<(), ProviderError>;

    async fn revoke_ingress(&self, group_id: &str, rule: &NetworkRule)
    -> Result<(), ProviderError>;
}
