//! Mint orchestrator - the idle/pending/success/error state machine.
//!
//! Sequences narrative collection, fee retrieval, network gating,
//! token-URI resolution and transaction submission as a strictly ordered
//! pipeline. Only one attempt may be pending per session; a second
//! confirm while pending is a guard failure, never a queued retry.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use mojomint_domain::{
    ContractAddress, DomainError, MintAttempt, MojoScore, NarrativeFlavor, NarrativePath,
    TxHash, WalletAddress, Wei,
};

use crate::infrastructure::ports::{ClockPort, ImageGenPort, MintCall, WalletPort};
use crate::use_cases::error::WorkflowError;
use crate::use_cases::mint::{BuildMetadata, ChainCheck, NetworkGuard, PublishMetadata};
use crate::use_cases::session::SessionStore;

/// What a finished attempt hands back to the display layer.
#[derive(Debug, Clone)]
pub struct MintOutcome {
    pub tx_hash: TxHash,
    pub path: NarrativePath,
    pub mojo: MojoScore,
    pub flavor: NarrativeFlavor,
    /// Present when the attempt proceeded on a fallback URI.
    pub warning: Option<String>,
}

struct Preflight {
    path: NarrativePath,
    fee: Wei,
    narrative: Option<String>,
}

pub struct MintOrchestrator {
    store: Arc<SessionStore>,
    wallet: Arc<dyn WalletPort>,
    guard: Arc<NetworkGuard>,
    imagegen: Arc<dyn ImageGenPort>,
    build: BuildMetadata,
    publish: PublishMetadata,
    clock: Arc<dyn ClockPort>,
    contract: ContractAddress,
    default_image: String,
}

impl MintOrchestrator {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<SessionStore>,
        wallet: Arc<dyn WalletPort>,
        guard: Arc<NetworkGuard>,
        imagegen: Arc<dyn ImageGenPort>,
        build: BuildMetadata,
        publish: PublishMetadata,
        clock: Arc<dyn ClockPort>,
        contract: ContractAddress,
        default_image: String,
    ) -> Self {
        Self {
            store,
            wallet,
            guard,
            imagegen,
            build,
            publish,
            clock,
            contract,
            default_image,
        }
    }

    /// Fetch the mint fee once per session and cache it. Later attempts
    /// reuse the cached value; a mid-flight on-chain fee change is
    /// deliberately ignored.
    pub async fn ensure_fee(&self, address: &WalletAddress) -> Result<Wei, WorkflowError> {
        let cached = self
            .store
            .read_slot(address, |slot| slot.cached_fee)
            .flatten();
        if let Some(fee) = cached {
            return Ok(fee);
        }

        let fee = self.wallet.mint_fee(&self.contract).await?;
        self.store.with_slot(address, |slot| {
            slot.cached_fee.get_or_insert(fee);
        });
        tracing::info!(user = %address, fee = %fee, "mint fee loaded");
        Ok(fee)
    }

    /// Snapshot of the current or most recent attempt, for display.
    pub fn attempt(&self, address: &WalletAddress) -> Option<MintAttempt> {
        self.store
            .read_slot(address, |slot| slot.attempt.clone())
            .flatten()
    }

    /// Quick mint: token URI is a base64 JSON data URI, no upload step.
    pub async fn confirm(
        &self,
        address: Option<&WalletAddress>,
    ) -> Result<MintOutcome, WorkflowError> {
        let address = address.ok_or(WorkflowError::NotConnected)?;
        let pre = self.preflight(address, false)?;
        self.check_network().await?;
        self.begin_attempt(address, pre.fee)?;

        let result = self.run_quick(address, &pre).await;
        self.settle(address, result)
    }

    /// Narrative mint: metadata is published to remote storage first,
    /// falling back to a locally derived URI if pinning is down.
    pub async fn mint_story(
        &self,
        address: Option<&WalletAddress>,
    ) -> Result<MintOutcome, WorkflowError> {
        let address = address.ok_or(WorkflowError::NotConnected)?;
        let pre = self.preflight(address, true)?;
        self.check_network().await?;
        self.begin_attempt(address, pre.fee)?;

        let result = self.run_story(address, &pre).await;
        self.settle(address, result)
    }

    // -------------------------------------------------------------------------
    // Pipeline stages
    // -------------------------------------------------------------------------

    /// Preconditions checked before any network call. Each unmet guard
    /// is a distinct failure and leaves existing attempt state alone.
    fn preflight(
        &self,
        address: &WalletAddress,
        need_narrative: bool,
    ) -> Result<Preflight, WorkflowError> {
        self.store
            .read_slot(address, |slot| {
                if slot
                    .attempt
                    .as_ref()
                    .is_some_and(|a| a.status().is_pending())
                {
                    return Err(WorkflowError::MintInProgress);
                }
                let session = slot.session.as_ref().ok_or(WorkflowError::NoSelection)?;
                let fee = slot.cached_fee.ok_or(WorkflowError::FeeNotLoaded)?;
                let narrative = session.final_narrative().map(str::to_string);
                if need_narrative && narrative.is_none() {
                    return Err(WorkflowError::Domain(DomainError::Validation(
                        "story is not finalized yet".into(),
                    )));
                }
                Ok(Preflight {
                    path: session.path(),
                    fee,
                    narrative,
                })
            })
            .unwrap_or(Err(WorkflowError::NoSelection))
    }

    /// Chain mismatch is a blocking precondition, not an in-flight
    /// error: request a switch, then abort. The user re-triggers the
    /// mint after the switch lands.
    async fn check_network(&self) -> Result<(), WorkflowError> {
        match self.guard.check().await.map_err(WorkflowError::from)? {
            ChainCheck::Ok => Ok(()),
            ChainCheck::Mismatch { current, required } => {
                if let Err(e) = self.guard.switch_to_required().await {
                    tracing::warn!(error = %e, "chain switch request failed");
                }
                Err(WorkflowError::WrongNetwork { current, required })
            }
        }
    }

    fn begin_attempt(&self, address: &WalletAddress, fee: Wei) -> Result<(), WorkflowError> {
        let now = self.clock.now();
        self.store.with_slot(address, |slot| {
            // Re-checked under the slot lock: confirms racing past
            // preflight must not stack attempts.
            if slot
                .attempt
                .as_ref()
                .is_some_and(|a| a.status().is_pending())
            {
                return Err(WorkflowError::MintInProgress);
            }
            slot.attempt = Some(MintAttempt::begin(fee, now));
            Ok(())
        })?;
        tracing::info!(user = %address, fee = %fee, "mint attempt pending");
        Ok(())
    }

    async fn run_quick(
        &self,
        address: &WalletAddress,
        pre: &Preflight,
    ) -> Result<MintOutcome, WorkflowError> {
        let description = format!("An on-chain jam on the {} path.", pre.path.label());
        let built = self
            .build
            .execute(pre.path, &self.default_image, &description)?;
        let token_uri = encode_data_uri(&built.metadata)?;

        let tx_hash = self
            .wallet
            .submit_mint(MintCall {
                to: address.clone(),
                contract: self.contract.clone(),
                token_uri,
                mojo: built.mojo,
                flavor: built.flavor,
                value: pre.fee,
            })
            .await?;

        Ok(MintOutcome {
            tx_hash,
            path: pre.path,
            mojo: built.mojo,
            flavor: built.flavor,
            warning: None,
        })
    }

    async fn run_story(
        &self,
        address: &WalletAddress,
        pre: &Preflight,
    ) -> Result<MintOutcome, WorkflowError> {
        let narrative = pre
            .narrative
            .clone()
            .ok_or_else(|| WorkflowError::Unknown("narrative vanished mid-attempt".into()))?;

        // Art generation failure is tolerable: mint with the cover image.
        let image = match self.imagegen.generate(&narrative, address).await {
            Ok(uri) => uri,
            Err(e) => {
                tracing::warn!(user = %address, error = %e, "image generation failed, using default art");
                self.default_image.clone()
            }
        };

        let built = self.build.execute(pre.path, &image, &narrative)?;
        let upload = self.publish.execute(&built.metadata, address).await;
        if let Some(warning) = &upload.warning {
            let warning = warning.clone();
            self.store.with_slot(address, |slot| {
                if let Some(attempt) = slot.attempt.as_mut() {
                    attempt.flag_degraded(warning);
                }
            });
        }

        let tx_hash = self
            .wallet
            .submit_mint(MintCall {
                to: address.clone(),
                contract: self.contract.clone(),
                token_uri: upload.uri,
                mojo: built.mojo,
                flavor: built.flavor,
                value: pre.fee,
            })
            .await?;

        Ok(MintOutcome {
            tx_hash,
            path: pre.path,
            mojo: built.mojo,
            flavor: built.flavor,
            warning: upload.warning,
        })
    }

    /// Record the terminal state. Success clears the selection so a
    /// fresh mint can start; failure leaves the session intact so the
    /// user can retry without re-entering anything.
    fn settle(
        &self,
        address: &WalletAddress,
        result: Result<MintOutcome, WorkflowError>,
    ) -> Result<MintOutcome, WorkflowError> {
        self.store.with_slot(address, |slot| {
            let Some(attempt) = slot.attempt.as_mut() else {
                return;
            };
            let transition = match &result {
                Ok(outcome) => attempt.succeed(outcome.tx_hash.clone()),
                Err(e) => attempt.fail(e.user_message()),
            };
            if let Err(e) = transition {
                tracing::error!(user = %address, error = %e, "attempt transition refused");
            } else if result.is_ok() {
                slot.session = None;
            }
        });

        match &result {
            Ok(outcome) => {
                tracing::info!(user = %address, tx = %outcome.tx_hash, "mint confirmed")
            }
            Err(e) => tracing::warn!(user = %address, error = %e, "mint attempt failed"),
        }
        result
    }
}

fn encode_data_uri(metadata: &mojomint_domain::NftMetadata) -> Result<String, WorkflowError> {
    let json = serde_json::to_string(metadata)
        .map_err(|e| WorkflowError::Unknown(format!("metadata serialization failed: {e}")))?;
    Ok(format!(
        "data:application/json;base64,{}",
        BASE64.encode(json)
    ))
}
