//! In-memory wallet provider for local runs and testing.
//!
//! The real provider (browser wallet, keystore) is an external
//! collaborator reached only through WalletPort. This implementation
//! records submitted calls and can be scripted to fail, so the whole
//! workflow can run without a live chain.

use std::sync::Mutex;

use async_trait::async_trait;
use mojomint_domain::{ChainId, ContractAddress, TxHash, Wei};

use crate::infrastructure::ports::{MintCall, WalletError, WalletPort};

/// Outcome the next `submit_mint` should produce.
#[derive(Debug, Clone)]
pub enum ScriptedFailure {
    Reject,
    InsufficientFunds,
    Revert(String),
}

struct State {
    chain: ChainId,
    fee: Wei,
    next_failure: Option<ScriptedFailure>,
    switch_fails: bool,
    submitted: Vec<MintCall>,
}

/// Scripted WalletPort implementation.
pub struct DevWallet {
    state: Mutex<State>,
}

impl DevWallet {
    pub fn new(chain: ChainId, fee: Wei) -> Self {
        Self {
            state: Mutex::new(State {
                chain,
                fee,
                next_failure: None,
                switch_fails: false,
                submitted: Vec::new(),
            }),
        }
    }

    /// Queue a failure for the next submission.
    pub fn script_failure(&self, failure: ScriptedFailure) {
        if let Ok(mut state) = self.state.lock() {
            state.next_failure = Some(failure);
        }
    }

    /// Put the wallet on a different chain.
    pub fn set_chain(&self, chain: ChainId) {
        if let Ok(mut state) = self.state.lock() {
            state.chain = chain;
        }
    }

    /// Make chain-switch requests fail.
    pub fn refuse_switches(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.switch_fails = true;
        }
    }

    /// Calls submitted so far, in order.
    pub fn submitted(&self) -> Vec<MintCall> {
        self.state
            .lock()
            .map(|state| state.submitted.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WalletPort for DevWallet {
    async fn chain_id(&self) -> Result<ChainId, WalletError> {
        self.state
            .lock()
            .map(|state| state.chain)
            .map_err(|_| WalletError::Provider("wallet state poisoned".into()))
    }

    async fn switch_chain(&self, chain: ChainId) -> Result<(), WalletError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| WalletError::Provider("wallet state poisoned".into()))?;
        if state.switch_fails {
            return Err(WalletError::Rejected);
        }
        state.chain = chain;
        Ok(())
    }

    async fn mint_fee(&self, _contract: &ContractAddress) -> Result<Wei, WalletError> {
        self.state
            .lock()
            .map(|state| state.fee)
            .map_err(|_| WalletError::Provider("wallet state poisoned".into()))
    }

    async fn submit_mint(&self, call: MintCall) -> Result<TxHash, WalletError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| WalletError::Provider("wallet state poisoned".into()))?;
        if let Some(failure) = state.next_failure.take() {
            return Err(match failure {
                ScriptedFailure::Reject => WalletError::Rejected,
                ScriptedFailure::InsufficientFunds => WalletError::InsufficientFunds,
                ScriptedFailure::Revert(reason) => WalletError::Reverted(reason),
            });
        }
        state.submitted.push(call);
        let n = state.submitted.len();
        Ok(TxHash::new(format!("0x{n:064x}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mojomint_domain::{MojoScore, NarrativeFlavor, WalletAddress};

    fn call() -> MintCall {
        MintCall {
            to: WalletAddress::parse("0xabc123").unwrap(),
            contract: ContractAddress::parse("0xdef456").unwrap(),
            token_uri: "ipfs://QmTest".into(),
            mojo: MojoScore::new(50).unwrap(),
            flavor: NarrativeFlavor::Mystic,
            value: Wei(1),
        }
    }

    #[tokio::test]
    async fn records_submissions_and_returns_distinct_hashes() {
        let wallet = DevWallet::new(ChainId(10), Wei(1));
        let a = wallet.submit_mint(call()).await.unwrap();
        let b = wallet.submit_mint(call()).await.unwrap();
        assert_ne!(a, b);
        assert_eq!(wallet.submitted().len(), 2);
    }

    #[tokio::test]
    async fn scripted_failure_fires_once() {
        let wallet = DevWallet::new(ChainId(10), Wei(1));
        wallet.script_failure(ScriptedFailure::Reject);
        assert!(matches!(
            wallet.submit_mint(call()).await,
            Err(WalletError::Rejected)
        ));
        assert!(wallet.submit_mint(call()).await.is_ok());
    }

    #[tokio::test]
    async fn switch_chain_moves_the_wallet() {
        let wallet = DevWallet::new(ChainId(1), Wei(1));
        wallet.switch_chain(ChainId(10)).await.unwrap();
        assert_eq!(wallet.chain_id().await.unwrap(), ChainId(10));
    }
}
