use serde::{Deserialize, Serialize};
use tracing::debug;

use super::wallet::{WalletRiskSummary, WalletService};
use crate::core::{DatasetMetadata, Result};

/// Outcome of one verification. Metadata is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletVerification {
    pub found: bool,
    pub summary: Option<WalletRiskSummary>,
    pub metadata: DatasetMetadata,
}

#[derive(Debug, Clone)]
pub struct WalletVerificationUseCase {
    service: WalletService,
}

impl WalletVerificationUseCase {
    pub fn new(service: WalletService) -> Self {
        Self { service }
    }

    pub fn verify(&self, address: &str) -> Result<WalletVerification> {
        let summary = self.service.fetch_wallet_summary(address)?;
        let metadata = self.service.get_metadata()?.clone();
        debug!(address = %address.trim(), found = summary.is_some(), "Wallet verified");
        Ok(WalletVerification { found: summary.is_some(), summary, metadata })
    }

    pub fn metadata(&self) -> Result<DatasetMetadata> {
        Ok(self.service.get_metadata()?.clone())
    }

    pub fn service(&self) -> &WalletService {
        &self.service
    }
}
