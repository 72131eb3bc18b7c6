use serde::{Deserialize, Serialize};

use crate::domain::photos::Photo;

/// The photo attribute a ban applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanAttribute {
    Rover,
    Camera,
    EarthDate,
}

impl BanAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            BanAttribute::Rover => "rover",
            BanAttribute::Camera => "camera",
            BanAttribute::EarthDate => "earth_date",
        }
    }
}

impl std::fmt::Display for BanAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-specified exclusion. Values are taken as-is; no validation
/// is performed and duplicates are permitted (they are harmless when
/// filtering). Rules are only ever removed by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRule {
    pub attribute: BanAttribute,
    pub value: String,
}

impl BanRule {
    pub fn new(attribute: BanAttribute, value: impl Into<String>) -> Self {
        Self {
            attribute,
            value: value.into(),
        }
    }

    /// Whether this rule excludes the given photo. Rover and camera names
    /// compare case-insensitively: the upstream API capitalizes them while
    /// candidate sets and user input may not. Earth dates compare exactly.
    pub fn matches(&self, photo: &Photo) -> bool {
        match self.attribute {
            BanAttribute::Rover => photo.rover.name.eq_ignore_ascii_case(&self.value),
            BanAttribute::Camera => photo.camera.name.eq_ignore_ascii_case(&self.value),
            BanAttribute::EarthDate => photo.earth_date == self.value,
        }
    }

    /// Whether this rule bans the given candidate value for `attribute`.
    /// Used by the selector to subtract banned values from candidate sets.
    pub fn bans_candidate(&self, attribute: BanAttribute, candidate: &str) -> bool {
        self.attribute == attribute && self.value.eq_ignore_ascii_case(candidate)
    }
}

/// Whether any rule in `bans` excludes the photo.
pub fn is_banned(bans: &[BanRule], photo: &Photo) -> bool {
    bans.iter().any(|rule| rule.matches(photo))
}
