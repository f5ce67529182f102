use std::path::PathBuf;

use engine::{
    ActiveEffect, CombatantId, Effect, MatchController, MatchResult, MatchTemplate, Scripted,
    ScriptedOracle,
};
use models::CardId;

#[allow(unused)]
pub static SEED: u64 = 0x3a3f7af8085da7a2;

#[allow(unused)]
pub const RED: CombatantId = CombatantId(0);
#[allow(unused)]
pub const BLUE: CombatantId = CombatantId(1);

#[allow(unused)]
pub fn run_match(
    name: String,
    mut template: MatchTemplate,
) -> Result<MatchResult, Box<dyn std::error::Error>> {
    let name = name.replace('"', "");
    template.seed.get_or_insert(SEED);
    let mut controller: MatchController = template.try_into()?;
    let result = tracing::info_span!("match", %name).in_scope(|| controller.run())?;
    Ok(result)
}

#[allow(unused)]
pub fn read_match(path: &PathBuf) -> Result<MatchTemplate, Box<dyn std::error::Error>> {
    Ok(MatchTemplate::from_path(path)?)
}

/// Builds a match from inline TOML whose every decision is replayed from `script`.
#[allow(unused)]
pub fn scripted_match(
    source: &str,
    script: Vec<Scripted>,
) -> Result<MatchController, Box<dyn std::error::Error>> {
    let mut template = MatchTemplate::from_toml(source)?;
    template.seed.get_or_insert(SEED);
    let controller = MatchController::try_from(template)?.with_oracle(ScriptedOracle::new(script));
    Ok(controller)
}

#[allow(unused)]
pub fn effect_from_card(
    effect: Effect,
    target: CombatantId,
    card: u32,
) -> Result<ActiveEffect, Box<dyn std::error::Error>> {
    Ok(ActiveEffect {
        effect,
        target,
        card: Some(gamedata::card_by_id(CardId(card))?),
    })
}

#[allow(unused)]
pub fn card(id: u32) -> Result<models::Card, Box<dyn std::error::Error>> {
    Ok(gamedata::card_by_id(CardId(id))?)
}
