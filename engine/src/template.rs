use models::{CardId, TeamColor};
use serde::Deserialize;

use crate::{
    BASE_DAMAGE, COMBATANT_JEWEL_CAPACITY, CombatantTemplate, GRAIL_TO_WIN, HAND_LIMIT,
    HEAL_CAPACITY, INITIAL_HAND, MAGIC_BULLET_DAMAGE, MAX_REPROMPTS, MAX_RESOLUTION_DEPTH,
    MAX_TURNS, POISON_DAMAGE, SPECIAL_ACTION_DRAW, STARTING_MORALE, SYNTHESIS_COST,
    TEAM_JEWEL_CAPACITY, WEAKNESS_DRAW,
};

/// Tunable numbers of a match. Missing fields fall back to the standard rules.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub starting_morale: i32,
    pub grail_to_win: u8,
    pub team_jewel_capacity: u8,
    pub combatant_jewel_capacity: u8,
    pub heal_capacity: u8,
    pub hand_limit: usize,
    pub initial_hand: usize,
    pub base_damage: u8,
    pub magic_bullet_damage: u8,
    pub poison_damage: u8,
    pub weakness_draw: u8,
    pub synthesis_cost: u8,
    pub special_action_draw: u8,
    pub max_resolution_depth: usize,
    pub max_turns: usize,
    pub max_reprompts: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            starting_morale: *STARTING_MORALE,
            grail_to_win: *GRAIL_TO_WIN,
            team_jewel_capacity: *TEAM_JEWEL_CAPACITY,
            combatant_jewel_capacity: *COMBATANT_JEWEL_CAPACITY,
            heal_capacity: *HEAL_CAPACITY,
            hand_limit: *HAND_LIMIT,
            initial_hand: *INITIAL_HAND,
            base_damage: *BASE_DAMAGE,
            magic_bullet_damage: *MAGIC_BULLET_DAMAGE,
            poison_damage: *POISON_DAMAGE,
            weakness_draw: *WEAKNESS_DRAW,
            synthesis_cost: *SYNTHESIS_COST,
            special_action_draw: *SPECIAL_ACTION_DRAW,
            max_resolution_depth: *MAX_RESOLUTION_DEPTH,
            max_turns: *MAX_TURNS,
            max_reprompts: *MAX_REPROMPTS,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.starting_morale <= 0 {
            anyhow::bail!("starting morale must be positive ({})", self.starting_morale)
        }
        if self.grail_to_win == 0 {
            anyhow::bail!("grail to win must be positive")
        }
        if self.max_resolution_depth == 0 {
            anyhow::bail!("max resolution depth must be positive")
        }
        if self.max_reprompts == 0 {
            anyhow::bail!("max reprompts must be positive")
        }
        if self.synthesis_cost > self.team_jewel_capacity {
            anyhow::bail!(
                "synthesis cost {} exceeds the team jewel capacity {}",
                self.synthesis_cost,
                self.team_jewel_capacity
            )
        }
        if self.initial_hand > self.hand_limit {
            anyhow::bail!(
                "initial hand {} exceeds the hand limit {}",
                self.initial_hand,
                self.hand_limit
            )
        }
        if self.max_turns == 0 {
            anyhow::bail!("max turns must be positive")
        }
        Ok(())
    }
}

/// Starting state of one team. Morale defaults to the rules' starting morale.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamTemplate {
    #[serde(default)]
    pub morale: Option<i32>,
    #[serde(default)]
    pub grail: u8,
    #[serde(default)]
    pub gem: u8,
    #[serde(default)]
    pub crystal: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamTemplates {
    #[serde(default)]
    pub red: TeamTemplate,
    #[serde(default)]
    pub blue: TeamTemplate,
}

impl TeamTemplates {
    pub fn get(&self, color: TeamColor) -> &TeamTemplate {
        match color {
            TeamColor::Red => &self.red,
            TeamColor::Blue => &self.blue,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchTemplate {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub rules: Rules,
    #[serde(default)]
    pub teams: TeamTemplates,
    #[serde(rename = "combatants")]
    pub combatant_templates: Vec<CombatantTemplate>,
    /// Draw order, top first. When absent the whole card database is shuffled.
    #[serde(default)]
    pub deck: Option<Vec<CardId>>,
    #[serde(skip, default)]
    pub source: Option<String>,
}

impl MatchTemplate {
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let mut template = toml::from_str::<MatchTemplate>(source)?;
        template.source = Some(source.to_string());
        Ok(template)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("unable to read {}: {error}", path.display()))?;
        Self::from_toml(&source)
    }

    /// Checks everything a match needs before it can be built.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.rules.validate()?;
        for color in [TeamColor::Red, TeamColor::Blue] {
            if !self.combatant_templates.iter().any(|c| c.team == color) {
                anyhow::bail!("team {color} has no combatants")
            }
            let team = self.teams.get(color);
            if let Some(morale) = team.morale {
                if morale <= 0 {
                    anyhow::bail!("team {color} starts without morale ({morale})")
                }
            }
            if team.grail >= self.rules.grail_to_win {
                anyhow::bail!("team {color} starts with a winning grail count ({})", team.grail)
            }
            if team.gem as u16 + team.crystal as u16 > self.rules.team_jewel_capacity as u16 {
                anyhow::bail!(
                    "team {color} jewels exceed capacity {}",
                    self.rules.team_jewel_capacity
                )
            }
        }

        let mut names: Vec<&str> = Vec::new();
        let mut dealt: Vec<CardId> = Vec::new();
        for combatant in &self.combatant_templates {
            if names.contains(&combatant.name.as_str()) {
                anyhow::bail!("duplicate combatant name {}", combatant.name)
            }
            names.push(&combatant.name);
            combatant.validate(&self.rules)?;
            for id in combatant.hand.iter().flatten() {
                if dealt.contains(id) {
                    anyhow::bail!("card {id} is dealt twice")
                }
                dealt.push(*id);
            }
        }
        for id in self.deck.iter().flatten() {
            if dealt.contains(id) {
                anyhow::bail!("card {id} is dealt twice")
            }
            dealt.push(*id);
        }
        Ok(())
    }
}
