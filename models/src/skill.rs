use heck::ToSnakeCase;

/// Character-specific marker printed on a card; abilities check for it before firing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UniqueSkill {
    BloodBlade,
    BloodRoar,
    AccurateShot,
    FastWind,
    HardWind,
    Raw(String),
}

impl From<&str> for UniqueSkill {
    fn from(value: &str) -> Self {
        match value.to_snake_case().as_str() {
            "blood_blade" => UniqueSkill::BloodBlade,
            "blood_roar" => UniqueSkill::BloodRoar,
            "accurate_shot" => UniqueSkill::AccurateShot,
            "fast_wind" => UniqueSkill::FastWind,
            "hard_wind" => UniqueSkill::HardWind,
            _ => UniqueSkill::Raw(value.to_string()),
        }
    }
}

impl std::fmt::Display for UniqueSkill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UniqueSkill::BloodBlade => write!(f, "blood_blade"),
            UniqueSkill::BloodRoar => write!(f, "blood_roar"),
            UniqueSkill::AccurateShot => write!(f, "accurate_shot"),
            UniqueSkill::FastWind => write!(f, "fast_wind"),
            UniqueSkill::HardWind => write!(f, "hard_wind"),
            UniqueSkill::Raw(s) => write!(f, "{s}"),
        }
    }
}
