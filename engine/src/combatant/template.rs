use models::{CardId, TeamColor};
use serde::Deserialize;

use crate::{
    ActionPoints, Character, Combatant, CombatantId, EffectStore, Hand, HealPool, JewelCount,
    JewelLedger, Rules, Targetability,
};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombatantTemplate {
    pub name: String,
    pub team: TeamColor,
    #[serde(default)]
    pub character: Character,
    #[serde(default)]
    pub heal: u8,
    #[serde(default)]
    pub gem: u8,
    #[serde(default)]
    pub crystal: u8,
    /// Scripted starting hand. When absent the combatant is dealt from the deck.
    #[serde(default)]
    pub hand: Option<Vec<CardId>>,
}

impl CombatantTemplate {
    pub fn validate(&self, rules: &Rules) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("combatant name must not be empty")
        }
        if self.heal > rules.heal_capacity {
            anyhow::bail!(
                "{} starts with {} heal, capacity is {}",
                self.name,
                self.heal,
                rules.heal_capacity
            )
        }
        if self.gem as u16 + self.crystal as u16 > rules.combatant_jewel_capacity as u16 {
            anyhow::bail!(
                "{} starts with more jewels than capacity {}",
                self.name,
                rules.combatant_jewel_capacity
            )
        }
        if let Some(hand) = &self.hand {
            if hand.len() > rules.hand_limit {
                anyhow::bail!(
                    "{} starts with {} cards, hand limit is {}",
                    self.name,
                    hand.len(),
                    rules.hand_limit
                )
            }
        }
        Ok(())
    }

    /// Builds the combatant with an empty hand; cards are dealt by the controller.
    pub fn create_combatant(&self, id: CombatantId, rules: &Rules) -> anyhow::Result<Combatant> {
        let jewels = JewelLedger::with_holding(
            rules.combatant_jewel_capacity,
            JewelCount::new(self.gem, self.crystal),
        )
        .map_err(|error| anyhow::anyhow!("invalid jewels for {}: {error}", self.name))?;
        let heal = HealPool::new(self.heal, rules.heal_capacity)
            .map_err(|error| anyhow::anyhow!("invalid heal for {}: {error}", self.name))?;
        Ok(Combatant {
            id,
            name: self.name.clone(),
            team: self.team,
            character: self.character,
            hand: Hand::new(rules.hand_limit),
            jewels,
            heal,
            effects: EffectStore::default(),
            action_points: ActionPoints::default(),
            flags: Targetability::default(),
            attacks_this_turn: 0,
            abilities: self.character.abilities(),
        })
    }
}
