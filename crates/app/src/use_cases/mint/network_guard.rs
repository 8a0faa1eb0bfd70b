//! Network guard - "is the workflow allowed to proceed" gate.
//!
//! Queries the wallet's active chain on demand and compares it to the
//! required chain. Holds no chain state beyond the last observed value;
//! switching is a capability delegated to the wallet provider.

use std::sync::{Arc, Mutex};

use mojomint_domain::ChainId;

use crate::infrastructure::ports::{WalletError, WalletPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainCheck {
    Ok,
    Mismatch { current: ChainId, required: ChainId },
}

pub struct NetworkGuard {
    wallet: Arc<dyn WalletPort>,
    required: ChainId,
    last_observed: Mutex<Option<ChainId>>,
}

impl NetworkGuard {
    pub fn new(wallet: Arc<dyn WalletPort>, required: ChainId) -> Self {
        Self {
            wallet,
            required,
            last_observed: Mutex::new(None),
        }
    }

    pub fn required(&self) -> ChainId {
        self.required
    }

    /// Last chain id seen, without a fresh provider read.
    pub fn last_observed(&self) -> Option<ChainId> {
        self.last_observed.lock().ok().and_then(|guard| *guard)
    }

    /// Read the active chain from the provider, refreshing the cache.
    pub async fn current_chain(&self) -> Result<ChainId, WalletError> {
        let current = self.wallet.chain_id().await?;
        if let Ok(mut guard) = self.last_observed.lock() {
            *guard = Some(current);
        }
        Ok(current)
    }

    /// Fresh comparison against the required chain.
    pub async fn check(&self) -> Result<ChainCheck, WalletError> {
        let current = self.current_chain().await?;
        if current == self.required {
            Ok(ChainCheck::Ok)
        } else {
            Ok(ChainCheck::Mismatch {
                current,
                required: self.required,
            })
        }
    }

    /// Ask the provider to move to the required chain. The caller must
    /// re-trigger its workflow after a successful switch.
    pub async fn switch_to_required(&self) -> Result<(), WalletError> {
        tracing::info!(required = %self.required, "requesting chain switch");
        self.wallet.switch_chain(self.required).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockWalletPort;

    #[tokio::test]
    async fn check_reports_mismatch_with_both_chains() {
        let mut wallet = MockWalletPort::new();
        wallet.expect_chain_id().returning(|| Ok(ChainId(1)));

        let guard = NetworkGuard::new(Arc::new(wallet), ChainId(10));
        assert_eq!(
            guard.check().await.unwrap(),
            ChainCheck::Mismatch {
                current: ChainId(1),
                required: ChainId(10)
            }
        );
        assert_eq!(guard.last_observed(), Some(ChainId(1)));
    }

    #[tokio::test]
    async fn check_passes_on_the_required_chain() {
        let mut wallet = MockWalletPort::new();
        wallet.expect_chain_id().returning(|| Ok(ChainId(10)));

        let guard = NetworkGuard::new(Arc::new(wallet), ChainId(10));
        assert_eq!(guard.check().await.unwrap(), ChainCheck::Ok);
    }

    #[tokio::test]
    async fn switch_delegates_to_the_provider() {
        let mut wallet = MockWalletPort::new();
        wallet
            .expect_switch_chain()
            .withf(|chain| *chain == ChainId(10))
            .times(1)
            .returning(|_| Ok(()));

        let guard = NetworkGuard::new(Arc::new(wallet), ChainId(10));
        guard.switch_to_required().await.unwrap();
    }
}
