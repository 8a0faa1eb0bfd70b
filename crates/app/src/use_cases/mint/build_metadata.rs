//! Build metadata use case.
//!
//! Pure aside from the injected random draws: an integer mojo score
//! uniform in [0,100] and a flavor uniform over the fixed vocabulary.

use std::sync::Arc;

use mojomint_domain::{
    DomainError, MojoScore, NarrativeFlavor, NarrativePath, NftMetadata,
};

use crate::infrastructure::ports::RandomPort;

/// Metadata plus the drawn values the mint call needs as arguments.
#[derive(Debug, Clone)]
pub struct BuiltMetadata {
    pub metadata: NftMetadata,
    pub mojo: MojoScore,
    pub flavor: NarrativeFlavor,
}

pub struct BuildMetadata {
    random: Arc<dyn RandomPort>,
}

impl BuildMetadata {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn execute(
        &self,
        path: NarrativePath,
        image: &str,
        description: &str,
    ) -> Result<BuiltMetadata, DomainError> {
        let score = self.random.gen_range(0, MojoScore::MAX as i32);
        let mojo = MojoScore::new(score.clamp(0, MojoScore::MAX as i32) as u32)?;

        let flavors = NarrativeFlavor::all();
        let idx = self.random.gen_range(0, flavors.len() as i32 - 1);
        let flavor = flavors[idx.clamp(0, flavors.len() as i32 - 1) as usize];

        Ok(BuiltMetadata {
            metadata: NftMetadata::new(path, mojo, flavor, image, description),
            mojo,
            flavor,
        })
    }
}
