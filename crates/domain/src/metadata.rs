//! NFT metadata value objects.
//!
//! `NftMetadata` is built once per mint attempt and never mutated after
//! construction; a new attempt builds a new instance.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::narrative::NarrativePath;

/// 0-100 score drawn fresh for every mint attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MojoScore(u32);

impl MojoScore {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::MojoOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MojoScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed 3-value flavor vocabulary embedded in metadata and passed to the
/// mint contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NarrativeFlavor {
    Mystic,
    Rebel,
    Dreamer,
}

impl NarrativeFlavor {
    pub fn all() -> &'static [NarrativeFlavor] {
        &[
            NarrativeFlavor::Mystic,
            NarrativeFlavor::Rebel,
            NarrativeFlavor::Dreamer,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mystic => "Mystic",
            Self::Rebel => "Rebel",
            Self::Dreamer => "Dreamer",
        }
    }
}

impl std::fmt::Display for NarrativeFlavor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `{trait_type, value}` pair in the canonical metadata JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    pub trait_type: String,
    pub value: String,
}

impl MetadataAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// Canonical token metadata. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMetadata {
    name: String,
    description: String,
    image: String,
    attributes: Vec<MetadataAttribute>,
}

impl NftMetadata {
    /// Assemble metadata for a mint attempt. The attribute set always
    /// carries the path label, the mojo score and the flavor tag, in that
    /// order.
    pub fn new(
        path: NarrativePath,
        mojo: MojoScore,
        flavor: NarrativeFlavor,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: format!("Mojo Jam: {}", path.label()),
            description: description.into(),
            image: image.into(),
            attributes: vec![
                MetadataAttribute::new("Path", path.label()),
                MetadataAttribute::new("Mojo Score", mojo.to_string()),
                MetadataAttribute::new("Narrative Flavor", flavor.as_str()),
            ],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn attributes(&self) -> &[MetadataAttribute] {
        &self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mojo_score_bounds() {
        assert!(MojoScore::new(0).is_ok());
        assert!(MojoScore::new(100).is_ok());
        assert!(matches!(
            MojoScore::new(101),
            Err(DomainError::MojoOutOfRange(101))
        ));
    }

    #[test]
    fn metadata_serializes_with_trait_type_keys() {
        let meta = NftMetadata::new(
            NarrativePath::DigitalDreamer,
            MojoScore::new(42).unwrap(),
            NarrativeFlavor::Rebel,
            "ipfs://QmImage",
            "A story",
        );
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["attributes"][1]["trait_type"], "Mojo Score");
        assert_eq!(json["attributes"][1]["value"], "42");
        assert_eq!(json["attributes"][2]["value"], "Rebel");
        assert_eq!(json["image"], "ipfs://QmImage");
    }
}
