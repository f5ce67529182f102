mod aux;

use std::path::PathBuf;

use aux::read_match;
use engine::{Character, CombatantId, MatchController, MatchTemplate, Rules};
use models::TeamColor;
use rstest::rstest;

#[rstest]
fn test_invalid_template(
    #[files("tests/matches/invalid/template/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = read_match(&path);
    assert!(
        matches!(result, Err(..)),
        "Template parsing `{:?}` succeeded: Expected `Err` got `{result:?}`",
        path.file_name().unwrap(),
    );
    Ok(())
}

#[rstest]
fn test_invalid_match(
    #[files("tests/matches/invalid/match/*.toml")] path: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = read_match(&path)?;
    let result = MatchController::try_from(template);
    assert!(
        matches!(result, Err(..)),
        "Match setup `{:?}` succeeded: Expected `Err`",
        path.file_name().unwrap(),
    );
    Ok(())
}

#[rstest]
fn test_rules_default_when_omitted() -> Result<(), Box<dyn std::error::Error>> {
    let template = MatchTemplate::from_toml(
        r#"
        [[combatants]]
        name = "ardent"
        team = "red"
        character = "berserker"

        [[combatants]]
        name = "brine"
        team = "blue"
        "#,
    )?;
    assert_eq!(template.rules, Rules::default());
    assert_eq!(template.combatant_templates[0].character, Character::Berserker);
    assert_eq!(template.combatant_templates[1].character, Character::Plain);
    assert!(template.source.is_some());

    let controller = MatchController::try_from(template)?;
    let context = controller.context();
    assert_eq!(context.team(TeamColor::Red)?.morale, 15);
    assert_eq!(context.team(TeamColor::Blue)?.grail, 0);
    assert_eq!(context.initial_deal.len(), 2);
    assert_eq!(context.combatant(CombatantId(0))?.abilities.len(), 3);
    assert!(context.combatant(CombatantId(1))?.abilities.is_empty());
    Ok(())
}

#[rstest]
#[case("starting_morale = 3", 3, 5)]
#[case("grail_to_win = 2", 15, 2)]
fn test_rules_override(
    #[case] rule: &str,
    #[case] morale: i32,
    #[case] grail: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = MatchTemplate::from_toml(&format!(
        r#"
        [rules]
        {rule}

        [[combatants]]
        name = "ardent"
        team = "red"

        [[combatants]]
        name = "brine"
        team = "blue"
        "#
    ))?;
    assert_eq!(template.rules.starting_morale, morale);
    assert_eq!(template.rules.grail_to_win, grail);
    assert_eq!(template.rules.hand_limit, Rules::default().hand_limit);
    Ok(())
}

#[rstest]
#[case(Rules { max_resolution_depth: 0, ..Rules::default() }, "resolution depth")]
#[case(Rules { max_reprompts: 0, ..Rules::default() }, "reprompts")]
#[case(Rules { initial_hand: 7, ..Rules::default() }, "hand limit")]
fn test_rules_reject_unplayable_bounds(#[case] rules: Rules, #[case] reason: &str) {
    let result = rules.validate();
    assert!(
        result.as_ref().is_err_and(|e| e.to_string().contains(reason)),
        "Expected a `{reason}` error, got `{result:?}`"
    );
}
