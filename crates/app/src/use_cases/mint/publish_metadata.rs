//! Publish metadata use case - the upload coordinator.
//!
//! Tries the pinning service exactly once. On any failure it derives a
//! local fallback URI instead of propagating the error, so the mint can
//! proceed through an infrastructure outage. The result always says
//! whether the fallback fired; callers decide policy.

use std::sync::Arc;

use mojomint_domain::{NftMetadata, UploadResult, WalletAddress};

use crate::infrastructure::ports::{ClockPort, MetadataPinPort, RandomPort};

pub struct PublishMetadata {
    pin: Arc<dyn MetadataPinPort>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
}

impl PublishMetadata {
    pub fn new(
        pin: Arc<dyn MetadataPinPort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self { pin, clock, random }
    }

    /// The returned `uri` is never empty: either the pinned URI or the
    /// derived fallback.
    pub async fn execute(&self, metadata: &NftMetadata, user: &WalletAddress) -> UploadResult {
        let timestamp = self.clock.now();

        match self.pin.pin(metadata, user, timestamp).await {
            Ok(uri) => {
                tracing::info!(user = %user, %uri, "metadata pinned");
                UploadResult::pinned(uri)
            }
            Err(e) => {
                let uri = format!(
                    "ipfs://QmFallback{}{}{}",
                    timestamp.timestamp_millis(),
                    self.random.gen_range(1000, 9999),
                    user.short(6),
                );
                tracing::warn!(user = %user, error = %e, %uri, "pin failed, substituting fallback URI");
                UploadResult::fallback(
                    uri,
                    format!("metadata pinning unavailable, minted with a local URI ({e})"),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, FixedRandom};
    use crate::infrastructure::ports::{MockMetadataPinPort, RemoteServiceError};
    use chrono::TimeZone;
    use chrono::Utc;
    use mojomint_domain::{MojoScore, NarrativeFlavor, NarrativePath};

    fn user() -> WalletAddress {
        WalletAddress::parse("0xdeadbeef1234").unwrap()
    }

    fn metadata() -> NftMetadata {
        NftMetadata::new(
            NarrativePath::DigitalDreamer,
            MojoScore::new(10).unwrap(),
            NarrativeFlavor::Dreamer,
            "ipfs://QmArt",
            "story",
        )
    }

    #[tokio::test]
    async fn successful_pin_passes_the_uri_through() {
        let mut pin = MockMetadataPinPort::new();
        pin.expect_pin()
            .times(1)
            .returning(|_, _, _| Ok("ipfs://QmReal".to_string()));

        let use_case = PublishMetadata::new(
            Arc::new(pin),
            Arc::new(FixedClock(Utc::now())),
            Arc::new(FixedRandom(4321)),
        );
        let result = use_case.execute(&metadata(), &user()).await;

        assert!(result.success);
        assert_eq!(result.uri, "ipfs://QmReal");
        assert!(result.warning.is_none());
    }

    #[tokio::test]
    async fn http_500_substitutes_the_fallback_uri() {
        let mut pin = MockMetadataPinPort::new();
        pin.expect_pin()
            .returning(|_, _, _| Err(RemoteServiceError::status("pinning", 500, "oops")));

        let ts = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let use_case = PublishMetadata::new(
            Arc::new(pin),
            Arc::new(FixedClock(ts)),
            Arc::new(FixedRandom(4321)),
        );
        let result = use_case.execute(&metadata(), &user()).await;

        assert!(!result.success);
        assert_eq!(
            result.uri,
            format!("ipfs://QmFallback{}4321deadbe", ts.timestamp_millis())
        );
        assert!(result.warning.is_some());
    }

    #[tokio::test]
    async fn uri_is_never_empty_for_any_failure_kind() {
        for error in [
            RemoteServiceError::transport("pinning", "refused"),
            RemoteServiceError::malformed("pinning", "not json"),
            RemoteServiceError::missing_field("pinning", "uri", "{}"),
        ] {
            let mut pin = MockMetadataPinPort::new();
            let e = error.clone();
            pin.expect_pin().returning(move |_, _, _| Err(e.clone()));

            let use_case = PublishMetadata::new(
                Arc::new(pin),
                Arc::new(FixedClock(Utc::now())),
                Arc::new(FixedRandom(1000)),
            );
            let result = use_case.execute(&metadata(), &user()).await;
            assert!(!result.uri.is_empty());
            assert!(!result.success);
        }
    }
}
