mod aux;

use aux::{BLUE, RED, card, effect_from_card, scripted_match};
use engine::{
    ActionKind, ActionPick, AttackEvent, AttackOutcome, DamagePipeline, DamageStep, Effect,
    MatchController, MatchEvent, ResponsePick, Scripted,
};
use models::CardId;
use rstest::rstest;

fn arena(character: &str, script: Vec<Scripted>) -> Result<MatchController, Box<dyn std::error::Error>> {
    let source = format!(
        r#"
        deck = [5, 6, 9, 12, 15, 18]

        [[combatants]]
        name = "hero"
        team = "red"
        character = "{character}"
        gem = 1
        hand = [65, 3]

        [[combatants]]
        name = "target"
        team = "blue"
        heal = 2
        hand = [53, 54]
        "#
    );
    scripted_match(&source, script)
}

fn strike(
    controller: &mut MatchController,
    card_id: u32,
) -> Result<AttackEvent, Box<dyn std::error::Error>> {
    let context = controller.context_mut();
    let event = AttackEvent::attack(RED, BLUE, card(card_id)?, context.rules.base_damage);
    Ok(DamagePipeline::resolve(context, event, DamageStep::Activation)?)
}

#[rstest]
fn test_blood_blade_scales_with_small_hands() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("berserker", vec![Scripted::YesNo(true)])?;
    let resolved = strike(&mut controller, 38)?;
    assert_eq!(resolved.base_damage, 4, "2 + (4 - 2 cards held)");
    assert_eq!(resolved.final_damage, Some(4));
    Ok(())
}

#[rstest]
fn test_declined_ability_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("berserker", vec![Scripted::YesNo(false)])?;
    let resolved = strike(&mut controller, 38)?;
    assert_eq!(resolved.final_damage, Some(2));
    Ok(())
}

#[rstest]
fn test_blood_roar_forces_hit_on_full_heal() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("berserker", vec![Scripted::YesNo(true)])?;
    let resolved = strike(&mut controller, 37)?;
    assert_eq!(resolved.outcome, Some(AttackOutcome::Forced));
    assert_eq!(resolved.final_damage, Some(2), "the defender chose not to heal");
    Ok(())
}

#[rstest]
fn test_tear_spends_a_gem_for_damage() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("berserker", vec![Scripted::YesNo(true)])?;
    let resolved = strike(&mut controller, 39)?;
    assert_eq!(resolved.final_damage, Some(4));
    assert_eq!(controller.context().combatant(RED)?.jewels.gem(), 0);
    Ok(())
}

#[rstest]
fn test_accurate_shot_trades_damage_for_certainty() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("bow_goddess", vec![Scripted::YesNo(true)])?;
    let resolved = strike(&mut controller, 49)?;
    assert_eq!(resolved.outcome, Some(AttackOutcome::Forced));
    assert_eq!(resolved.final_damage, Some(1));
    assert!(!resolved.can_not_counter, "thunder bolt leaves forced attacks alone");
    Ok(())
}

#[rstest]
fn test_thunder_bolt_makes_thunder_uncounterable() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("bow_goddess", vec![])?;
    let resolved = strike(&mut controller, 50)?;
    assert!(resolved.can_not_counter);
    assert_eq!(resolved.outcome, Some(AttackOutcome::Hit));
    assert!(controller.context().combatant(BLUE)?.hand.contains(CardId(53)));
    Ok(())
}

#[rstest]
fn test_thunder_counter_stays_counterable() -> Result<(), Box<dyn std::error::Error>> {
    let source = r#"
        deck = [5, 6, 9, 12]

        [[combatants]]
        name = "plain"
        team = "red"
        hand = [50, 51]

        [[combatants]]
        name = "archer"
        team = "blue"
        character = "bow_goddess"
        hand = [53]
        "#;
    let script = vec![
        Scripted::Action(ActionPick::Attack(CardId(50))),
        Scripted::Target(BLUE),
        Scripted::Response(ResponsePick::Counter(CardId(53))),
        Scripted::Response(ResponsePick::Counter(CardId(51))),
    ];
    let mut controller = scripted_match(source, script)?;

    controller.play_turn()?;

    let context = controller.context();
    assert_eq!(context.resolutions, 3);
    assert!(context.events.contains(&MatchEvent::AttackResolved {
        attacker: BLUE,
        defender: RED,
        kind: ActionKind::Counter,
        outcome: Some(AttackOutcome::Countered),
        final_damage: 0,
    }));
    assert_eq!(context.combatant(BLUE)?.hand.len(), 2);
    Ok(())
}

#[rstest]
fn test_penetrate_shot_follows_a_miss() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("bow_goddess", vec![Scripted::Discard(vec![CardId(65)])])?;
    let shield = effect_from_card(Effect::HolyShield { source: BLUE }, BLUE, 77)?;
    controller.context_mut().combatant_mut(BLUE)?.add_effect(shield);

    let resolved = strike(&mut controller, 50)?;

    assert_eq!(resolved.outcome, Some(AttackOutcome::Shielded));
    let context = controller.context();
    assert!(!context.combatant(RED)?.hand.contains(CardId(65)));
    assert_eq!(context.combatant(BLUE)?.hand.len(), 4, "2 magic damage drawn");
    assert_eq!(context.deck.discard_len(), 2);
    assert_eq!(context.resolutions, 2);
    Ok(())
}

#[rstest]
fn test_hard_wind_pierces_shield() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("sword_master", vec![Scripted::YesNo(true)])?;
    let shield = effect_from_card(Effect::HolyShield { source: BLUE }, BLUE, 77)?;
    controller.context_mut().combatant_mut(BLUE)?.add_effect(shield);

    let resolved = strike(&mut controller, 14)?;

    assert!(!resolved.shieldable && resolved.can_not_counter);
    assert_eq!(resolved.outcome, Some(AttackOutcome::Hit));
    assert!(controller.context().combatant(BLUE)?.has_shield());
    Ok(())
}

#[rstest]
fn test_holy_sword_on_third_attack() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("sword_master", vec![Scripted::YesNo(true)])?;
    controller.context_mut().combatant_mut(RED)?.attacks_this_turn = 2;
    let resolved = strike(&mut controller, 15)?;
    assert_eq!(resolved.outcome, Some(AttackOutcome::Forced));
    Ok(())
}

#[rstest]
fn test_plain_combatant_has_no_abilities() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = arena("plain", vec![Scripted::YesNo(true)])?;
    let resolved = strike(&mut controller, 38)?;
    assert_eq!(resolved.final_damage, Some(2));
    assert_eq!(resolved.outcome, Some(AttackOutcome::Hit));
    Ok(())
}
