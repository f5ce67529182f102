#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Earth,
    Wind,
    Water,
    Fire,
    Thunder,
    Light,
    Dark,
}

impl TryFrom<&str> for Element {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "earth" => Ok(Element::Earth),
            "wind" => Ok(Element::Wind),
            "water" => Ok(Element::Water),
            "fire" => Ok(Element::Fire),
            "thunder" => Ok(Element::Thunder),
            "light" => Ok(Element::Light),
            "dark" | "darkness" => Ok(Element::Dark),
            element => anyhow::bail!("invalid element {element}"),
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Element::Earth => "earth",
            Element::Wind => "wind",
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Thunder => "thunder",
            Element::Light => "light",
            Element::Dark => "dark",
        };
        write!(f, "{name}")
    }
}
