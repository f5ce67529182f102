use std::rc::Rc;

use serde::Deserialize;

use crate::{
    Ability, AccurateShot, BloodBlade, BloodRoar, FastWind, HardWind, HolySword, PenetrateShot,
    Tear, ThunderBolt,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    #[default]
    Plain,
    Berserker,
    BowGoddess,
    SwordMaster,
}

impl Character {
    pub fn abilities(&self) -> Vec<Rc<dyn Ability>> {
        match self {
            Character::Plain => vec![],
            Character::Berserker => vec![Rc::new(BloodBlade), Rc::new(BloodRoar), Rc::new(Tear)],
            Character::BowGoddess => vec![
                Rc::new(AccurateShot),
                Rc::new(ThunderBolt),
                Rc::new(PenetrateShot),
            ],
            Character::SwordMaster => vec![Rc::new(FastWind), Rc::new(HardWind), Rc::new(HolySword)],
        }
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Character::Plain => write!(f, "plain"),
            Character::Berserker => write!(f, "berserker"),
            Character::BowGoddess => write!(f, "bow goddess"),
            Character::SwordMaster => write!(f, "sword master"),
        }
    }
}
