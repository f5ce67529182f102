mod aux;

use aux::{BLUE, RED, card, effect_from_card, scripted_match};
use engine::{
    Action, ActionKind, ActionPick, ActionPoints, CombatantId, Effect, EffectKind, EngineError,
    JewelCount, MatchController, MatchEvent, OracleError, Scripted, Targetability, execute_action,
    refine_options,
};
use models::{CardId, TeamColor};
use rstest::rstest;

const DUEL: &str = include_str!("matches/scenarios/duel.toml");
const TABLE: &str = include_str!("matches/scenarios/table.toml");
const SWORDPLAY: &str = include_str!("matches/scenarios/swordplay.toml");

fn actions_taken(events: &[MatchEvent], actor: CombatantId) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, MatchEvent::ActionTaken(id, ..) if *id == actor))
        .count()
}

#[rstest]
fn test_weakened_actor_skips_action_phase() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = scripted_match(DUEL, vec![Scripted::YesNo(true)])?;
    let weakness = effect_from_card(Effect::Weakness { source: BLUE }, RED, 71)?;
    controller.context_mut().combatant_mut(RED)?.add_effect(weakness);

    controller.play_turn()?;

    let context = controller.context();
    let actor = context.combatant(RED)?;
    assert_eq!(actor.hand.len(), 2);
    assert!(actor.effects.is_empty());
    assert!(actor.can_be(Targetability::CAN_BE_WEAKENED));
    assert_eq!(actions_taken(&context.events, RED), 0);
    assert_eq!(context.deck.discard_len(), 1, "the weakness card is recycled");
    assert!(context.events.contains(&MatchEvent::EffectConsumed(RED, EffectKind::Weakness)));
    Ok(())
}

#[rstest]
fn test_weakened_actor_draws_to_keep_acting() -> Result<(), Box<dyn std::error::Error>> {
    let script = vec![
        Scripted::YesNo(false),
        Scripted::Action(ActionPick::Attack(CardId(39))),
        Scripted::Target(BLUE),
    ];
    let mut controller = scripted_match(DUEL, script)?;
    let weakness = effect_from_card(Effect::Weakness { source: BLUE }, RED, 71)?;
    controller.context_mut().combatant_mut(RED)?.add_effect(weakness);

    controller.play_turn()?;

    let context = controller.context();
    assert_eq!(context.combatant(RED)?.hand.len(), 4, "2 + 3 drawn - 1 played");
    assert_eq!(context.combatant(BLUE)?.hand.len(), 4);
    assert_eq!(context.team(TeamColor::Red)?.jewels.gem(), 1);
    assert_eq!(context.team(TeamColor::Red)?.morale, 15);
    assert_eq!(actions_taken(&context.events, RED), 1);
    Ok(())
}

#[rstest]
fn test_poison_fires_in_seat_order_from_actor() -> Result<(), Box<dyn std::error::Error>> {
    let script = vec![
        Scripted::Action(ActionPick::Attack(CardId(39))),
        Scripted::Target(BLUE),
    ];
    let mut controller = scripted_match(TABLE, script)?;
    let context = controller.context_mut();
    let dusk = CombatantId(3);
    context
        .combatant_mut(RED)?
        .add_effect(effect_from_card(Effect::Poison { source: dusk, amount: 1 }, RED, 65)?);
    context
        .combatant_mut(RED)?
        .add_effect(effect_from_card(Effect::Poison { source: BLUE, amount: 1 }, RED, 66)?);
    context
        .combatant_mut(BLUE)?
        .add_effect(effect_from_card(Effect::Poison { source: RED, amount: 1 }, BLUE, 67)?);

    controller.play_turn()?;

    let context = controller.context();
    let poisoners: Vec<CombatantId> = context
        .events
        .iter()
        .filter_map(|e| match e {
            MatchEvent::AttackResolved {
                attacker,
                kind: ActionKind::Magic,
                final_damage: 1,
                ..
            } => Some(*attacker),
            _ => None,
        })
        .collect();
    assert_eq!(poisoners, vec![BLUE, dusk]);
    assert!(context.combatant(RED)?.effects.is_empty());
    assert_eq!(context.combatant(RED)?.hand.len(), 3, "2 + 2 poison draws - 1 played");
    assert_eq!(
        context.combatant(BLUE)?.effects.count(EffectKind::Poison),
        1,
        "only the actor's poisons fire"
    );
    assert_eq!(context.deck.discard_len(), 3);
    assert_eq!(context.team(TeamColor::Blue)?.jewels.total(), 0);
    Ok(())
}

#[rstest]
fn test_granted_attack_point_is_spent_before_general() -> Result<(), Box<dyn std::error::Error>> {
    let script = vec![
        Scripted::Action(ActionPick::Attack(CardId(13))),
        Scripted::Target(BLUE),
        Scripted::YesNo(true),
        Scripted::Action(ActionPick::Attack(CardId(15))),
        Scripted::Target(BLUE),
    ];
    let mut controller = scripted_match(SWORDPLAY, script)?;

    controller.play_turn()?;

    let context = controller.context();
    let actor = context.combatant(RED)?;
    assert_eq!(actions_taken(&context.events, RED), 2);
    assert_eq!(actor.hand.len(), 1);
    assert!(actor.hand.contains(CardId(27)));
    assert_eq!(actor.action_points, ActionPoints::default(), "turn end resets the bank");
    assert_eq!(actor.attacks_this_turn, 0);
    assert_eq!(context.combatant(BLUE)?.hand.len(), 5);
    assert_eq!(context.team(TeamColor::Red)?.jewels.gem(), 2);
    Ok(())
}

#[rstest]
fn test_end_turn_offered_after_an_action() -> Result<(), Box<dyn std::error::Error>> {
    let script = vec![
        Scripted::Action(ActionPick::Attack(CardId(13))),
        Scripted::Target(BLUE),
        Scripted::YesNo(true),
        Scripted::Action(ActionPick::EndTurn),
    ];
    let mut controller = scripted_match(SWORDPLAY, script)?;

    controller.play_turn()?;

    let context = controller.context();
    assert_eq!(actions_taken(&context.events, RED), 1);
    assert_eq!(context.combatant(RED)?.hand.len(), 2);
    assert_eq!(context.combatant(RED)?.action_points, ActionPoints::default());
    Ok(())
}

#[rstest]
fn test_end_turn_not_offered_before_an_action() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = scripted_match(SWORDPLAY, vec![Scripted::Action(ActionPick::EndTurn)])?;
    let result = controller.play_turn();
    assert!(
        matches!(result, Err(EngineError::Oracle(OracleError::Script(..)))),
        "ending the turn before acting should be refused, got `{result:?}`"
    );
    Ok(())
}

#[rstest]
fn test_turns_pass_round_the_table() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = scripted_match(TABLE, vec![])?;
    for _ in 0..5 {
        controller.play_turn()?;
        if controller.context().is_over() {
            break;
        }
    }
    let context = controller.context();
    let actors: Vec<CombatantId> = context
        .events
        .iter()
        .filter_map(|e| match e {
            MatchEvent::TurnStarted(summary, _) => Some(summary.id),
            _ => None,
        })
        .collect();
    let expected = [0, 1, 2, 3, 0].map(CombatantId);
    assert_eq!(actors, expected[..actors.len()].to_vec());
    Ok(())
}

#[rstest]
fn test_attack_needs_a_targetable_opponent() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = scripted_match(DUEL, vec![])?;
    let context = controller.context_mut();
    context
        .combatant_mut(BLUE)?
        .flags
        .remove(Targetability::CAN_BE_ATTACKED);
    let actions = engine::available_actions(context, RED)?;
    assert!(
        !actions.iter().any(|a| matches!(a, engine::Action::Attack { .. })),
        "no attack can be offered, got {actions:?}"
    );
    assert!(actions.iter().any(|a| matches!(a, engine::Action::Purchase)));
    Ok(())
}

/// Red holds one card, starts with the given team pool and personal gems.
fn economy(
    team: (u8, u8),
    personal_gem: u8,
    script: Vec<Scripted>,
) -> Result<MatchController, Box<dyn std::error::Error>> {
    let source = format!(
        r#"
        deck = [5, 6, 9, 12, 15, 18]

        [teams.red]
        gem = {}
        crystal = {}

        [[combatants]]
        name = "ardent"
        team = "red"
        gem = {personal_gem}
        hand = [39]

        [[combatants]]
        name = "brine"
        team = "blue"
        hand = [50]
        "#,
        team.0, team.1
    );
    scripted_match(&source, script)
}

#[rstest]
#[case::room_for_both((0, 0), vec![], (1, 1))]
#[case::room_for_one((2, 2), vec![Scripted::Jewels(JewelCount::new(0, 1))], (2, 3))]
#[case::pool_full((3, 2), vec![], (3, 2))]
fn test_purchase_fills_free_room(
    #[case] team: (u8, u8),
    #[case] script: Vec<Scripted>,
    #[case] expected: (u8, u8),
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = economy(team, 0, script)?;
    let context = controller.context_mut();

    execute_action(context, RED, &Action::Purchase)?;

    assert_eq!(context.combatant(RED)?.hand.len(), 4, "3 cards drawn");
    let jewels = &context.team(TeamColor::Red)?.jewels;
    assert_eq!((jewels.gem(), jewels.crystal()), expected);
    assert_eq!(context.team(TeamColor::Red)?.morale, 15);
    Ok(())
}

#[rstest]
fn test_refine_only_offers_what_fits() -> Result<(), Box<dyn std::error::Error>> {
    let script = vec![Scripted::Jewels(JewelCount::new(0, 1))];
    let mut controller = economy((2, 1), 2, script)?;
    let context = controller.context_mut();

    let mut options = refine_options(context, RED)?;
    options.sort();
    assert_eq!(options, vec![JewelCount::new(0, 1), JewelCount::new(1, 0)]);

    execute_action(context, RED, &Action::Refine)?;

    let team = &context.team(TeamColor::Red)?.jewels;
    assert_eq!((team.gem(), team.crystal()), (2, 0));
    let personal = &context.combatant(RED)?.jewels;
    assert_eq!((personal.gem(), personal.crystal()), (2, 1));
    Ok(())
}

#[rstest]
fn test_unavailable_action_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = economy((2, 1), 3, vec![])?;
    let context = controller.context_mut();
    let foreign = card(42)?;

    for action in [Action::Refine, Action::Attack { card: foreign }] {
        let result = execute_action(context, RED, &action);
        assert!(
            matches!(result, Err(EngineError::UnavailableAction { actor, .. }) if actor == RED),
            "Expected `UnavailableAction` for {action}, got `{result:?}`"
        );
    }
    assert_eq!(context.combatant(RED)?.action_points, ActionPoints::default());
    Ok(())
}
