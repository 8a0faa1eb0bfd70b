//! Per-identity session state.
//!
//! One slot per connected wallet, keyed by normalized address. All
//! mutation happens through short synchronous closures; no lock is ever
//! held across a suspension point.

use dashmap::DashMap;
use mojomint_domain::{MintAttempt, NarrativeSession, WalletAddress, Wei};

/// Everything the workflow tracks for one identity.
#[derive(Debug, Default)]
pub struct SessionSlot {
    /// Questionnaire state; None until a path is selected.
    pub session: Option<NarrativeSession>,
    /// Mint fee, fetched lazily once per session and cached. Not
    /// refetched per attempt.
    pub cached_fee: Option<Wei>,
    /// Current or most recent mint attempt.
    pub attempt: Option<MintAttempt>,
}

/// Concurrent map of per-wallet slots. There is no cross-session shared
/// state; each identity is independent.
pub struct SessionStore {
    slots: DashMap<WalletAddress, SessionSlot>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Run a closure against the (possibly fresh) slot for an address.
    /// The closure must not suspend.
    pub fn with_slot<R>(
        &self,
        address: &WalletAddress,
        f: impl FnOnce(&mut SessionSlot) -> R,
    ) -> R {
        let mut entry = self.slots.entry(address.clone()).or_default();
        f(entry.value_mut())
    }

    /// Read-only view of an existing slot, if any.
    pub fn read_slot<R>(
        &self,
        address: &WalletAddress,
        f: impl FnOnce(&SessionSlot) -> R,
    ) -> Option<R> {
        self.slots.get(address).map(|entry| f(entry.value()))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mojomint_domain::NarrativePath;

    #[test]
    fn slots_are_isolated_per_address() {
        let store = SessionStore::new();
        let a = WalletAddress::parse("0xaaaa").unwrap();
        let b = WalletAddress::parse("0xbbbb").unwrap();

        store.with_slot(&a, |slot| {
            slot.session = Some(NarrativeSession::new(NarrativePath::DigitalDreamer));
        });

        assert_eq!(
            store.read_slot(&a, |slot| slot.session.is_some()),
            Some(true)
        );
        assert_eq!(store.read_slot(&b, |slot| slot.session.is_some()), None);
    }
}
