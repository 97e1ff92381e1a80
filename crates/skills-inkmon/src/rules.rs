//! Design rules for creatures.

/// Fields every `inkmon` object must carry.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "name",
    "name_en",
    "dex_number",
    "description",
    "elements",
    "stats",
    "design",
    "evolution",
    "ecology",
    "image_prompts",
];

/// The six base stats, in display order.
pub const STAT_FIELDS: [&str; 6] = ["hp", "attack", "defense", "sp_attack", "sp_defense", "speed"];

/// Inclusive range of a single stat.
pub const STAT_RANGE: (i64, i64) = (1, 255);

pub const VALID_ELEMENTS: [&str; 14] = [
    "fire", "water", "grass", "electric", "ice", "rock", "ground", "flying", "bug", "poison", "dark",
    "light", "steel", "dragon",
];

pub const VALID_DIETS: [&str; 4] = ["herbivore", "carnivore", "omnivore", "special"];

/// Phrases the design prompt must contain, matched case-insensitively.
pub const STYLE_ANCHORS: [&str; 5] = [
    "low poly",
    "faceted",
    "sharp edges",
    "ink sketch texture",
    "non-reflective surface",
];

/// Evolution stage of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Baby,
    Mature,
    Adult,
}

impl Stage {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "baby" => Some(Self::Baby),
            "mature" => Some(Self::Mature),
            "adult" => Some(Self::Adult),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Baby => "baby",
            Self::Mature => "mature",
            Self::Adult => "adult",
        }
    }

    /// Inclusive range the base stat total must fall in.
    pub fn bst_range(self) -> (i64, i64) {
        match self {
            Self::Baby => (250, 350),
            Self::Mature => (350, 450),
            Self::Adult => (450, 550),
        }
    }
}

/// Step of the design workflow where a field is decided.
///
/// Errors point back to the step so the designer knows where to return.
pub mod step {
    pub const STAGE: u8 = 1;
    pub const IDENTITY: u8 = 2;
    pub const STATS: u8 = 3;
    pub const ECOLOGY: u8 = 4;
    pub const PROMPTS: u8 = 5;
}
