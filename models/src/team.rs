use serde::Deserialize;

#[derive(Copy, PartialEq, Eq, Hash, Deserialize, Debug, Clone, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TeamColor {
    Red,
    Blue,
}

impl TeamColor {
    pub fn inverse(&self) -> TeamColor {
        match self {
            TeamColor::Red => TeamColor::Blue,
            TeamColor::Blue => TeamColor::Red,
        }
    }
}

impl TryFrom<&str> for TeamColor {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "red" => Ok(TeamColor::Red),
            "blue" => Ok(TeamColor::Blue),
            color => anyhow::bail!("invalid team color {color}"),
        }
    }
}

impl std::fmt::Display for TeamColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamColor::Red => write!(f, "red"),
            TeamColor::Blue => write!(f, "blue"),
        }
    }
}
