//! Application state and composition.

use std::sync::Arc;

use mojomint_domain::{ChainId, ContractAddress};

use crate::infrastructure::ports::{
    ClockPort, ImageGenPort, MetadataPinPort, NarrativePort, RandomPort, RewardPort, WalletPort,
};
use crate::use_cases::{
    BuildMetadata, ClaimReward, FinalizeStory, MintOrchestrator, NetworkGuard, PublishMetadata,
    ResetStory, SelectPath, SessionStore, SubmitAnswer,
};

/// Everything the display layer is allowed to call.
///
/// The display layer invokes these operations and renders their state;
/// all session and attempt mutation stays behind them.
pub struct App {
    pub select_path: SelectPath,
    pub submit_answer: SubmitAnswer,
    pub finalize_story: FinalizeStory,
    pub reset_story: ResetStory,
    pub orchestrator: MintOrchestrator,
    pub claim_reward: ClaimReward,
    pub guard: Arc<NetworkGuard>,
}

/// Port implementations the app is wired from.
pub struct Ports {
    pub narrative: Arc<dyn NarrativePort>,
    pub pin: Arc<dyn MetadataPinPort>,
    pub imagegen: Arc<dyn ImageGenPort>,
    pub reward: Arc<dyn RewardPort>,
    pub wallet: Arc<dyn WalletPort>,
    pub clock: Arc<dyn ClockPort>,
    pub random: Arc<dyn RandomPort>,
}

impl App {
    pub fn new(
        ports: Ports,
        required_chain: ChainId,
        contract: ContractAddress,
        default_image: String,
    ) -> Self {
        let store = Arc::new(SessionStore::new());
        let guard = Arc::new(NetworkGuard::new(ports.wallet.clone(), required_chain));

        Self {
            select_path: SelectPath::new(store.clone(), ports.narrative.clone()),
            submit_answer: SubmitAnswer::new(store.clone(), ports.narrative.clone()),
            finalize_story: FinalizeStory::new(store.clone(), ports.narrative.clone()),
            reset_story: ResetStory::new(store.clone(), ports.narrative),
            orchestrator: MintOrchestrator::new(
                store,
                ports.wallet,
                guard.clone(),
                ports.imagegen,
                BuildMetadata::new(ports.random.clone()),
                PublishMetadata::new(ports.pin, ports.clock.clone(), ports.random),
                ports.clock,
                contract,
                default_image,
            ),
            claim_reward: ClaimReward::new(ports.reward),
            guard,
        }
    }
}
