//! Wallet capability port.
//!
//! The provider itself (browser wallet, keystore, dev node) is an
//! external collaborator. The workflow only depends on these four
//! capabilities: read the active chain, request a chain switch, read
//! the mint fee, and sign-and-submit the mint transaction.

use async_trait::async_trait;
use mojomint_domain::{
    ChainId, ContractAddress, MojoScore, NarrativeFlavor, TxHash, WalletAddress, Wei,
};

use super::error::WalletError;

/// Arguments for the payable mint call:
/// `mint(address to, string tokenURI, uint256 mojo, string narrative)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintCall {
    pub to: WalletAddress,
    pub contract: ContractAddress,
    pub token_uri: String,
    pub mojo: MojoScore,
    pub flavor: NarrativeFlavor,
    /// Fee attached as the transaction value, captured at attempt start.
    pub value: Wei,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletPort: Send + Sync {
    /// Chain the wallet is currently connected to.
    async fn chain_id(&self) -> Result<ChainId, WalletError>;

    /// Ask the provider to switch to the given chain. The user must
    /// re-trigger the workflow after a successful switch.
    async fn switch_chain(&self, chain: ChainId) -> Result<(), WalletError>;

    /// Read `mintFee()` from the contract.
    async fn mint_fee(&self, contract: &ContractAddress) -> Result<Wei, WalletError>;

    /// Sign and submit the mint call, resolving to the receipt's
    /// transaction hash.
    async fn submit_mint(&self, call: MintCall) -> Result<TxHash, WalletError>;
}
