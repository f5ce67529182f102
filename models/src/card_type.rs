#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CardType {
    Attack,
    Magic,
}

impl TryFrom<&str> for CardType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "attack" => Ok(CardType::Attack),
            "magic" => Ok(CardType::Magic),
            card_type => anyhow::bail!("invalid card type {card_type}"),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardType::Attack => write!(f, "attack"),
            CardType::Magic => write!(f, "magic"),
        }
    }
}
