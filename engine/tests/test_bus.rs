use engine::{
    DAMAGE_TIMELINE, EngineError, EventBus, EventType, Flow, GAME_TIMELINE, HandlerSlot,
};
use rstest::rstest;

type Log = Vec<&'static str>;

fn record(name: &'static str, flow: Flow) -> impl Fn(&mut Log, &mut u8) -> engine::EngineResult<Flow> {
    move |log: &mut Log, calls: &mut u8| {
        log.push(name);
        *calls += 1;
        Ok(flow)
    }
}

#[rstest]
fn test_slot_order_beats_registration_order() -> Result<(), Box<dyn std::error::Error>> {
    let mut bus: EventBus<Log, u8> = EventBus::new(&GAME_TIMELINE);
    bus.subscribe(EventType::BeforeAction, HandlerSlot::WeaknessTrigger, "weakness", record("weakness", Flow::Continue))?;
    bus.subscribe(EventType::BeforeAction, HandlerSlot::PoisonTrigger, "poison a", record("poison a", Flow::Continue))?;
    bus.subscribe(EventType::BeforeAction, HandlerSlot::BeforeAction, "before", record("before", Flow::Continue))?;
    bus.subscribe(EventType::BeforeAction, HandlerSlot::PoisonTrigger, "poison b", record("poison b", Flow::Continue))?;

    let mut log = Log::new();
    let mut calls = 0u8;
    let proceeded = bus.emit(&mut log, EventType::BeforeAction, &mut calls)?;
    assert!(proceeded);
    assert_eq!(log, vec!["before", "poison a", "poison b", "weakness"]);
    assert_eq!(calls, 4);
    assert_eq!(
        bus.handler_names(EventType::BeforeAction),
        vec!["before", "poison a", "poison b", "weakness"]
    );
    Ok(())
}

#[rstest]
fn test_stop_skips_remaining_handlers() -> Result<(), Box<dyn std::error::Error>> {
    let mut bus: EventBus<Log, u8> = EventBus::new(&GAME_TIMELINE);
    bus.subscribe(EventType::BeforeAction, HandlerSlot::PoisonTrigger, "poison", record("poison", Flow::Stop))?;
    bus.subscribe(EventType::BeforeAction, HandlerSlot::WeaknessTrigger, "weakness", record("weakness", Flow::Continue))?;

    let mut log = Log::new();
    let mut calls = 0u8;
    let proceeded = bus.emit(&mut log, EventType::BeforeAction, &mut calls)?;
    assert!(!proceeded, "a stopped emission must report `false`");
    assert_eq!(log, vec!["poison"]);
    Ok(())
}

#[rstest]
fn test_emit_without_handlers_proceeds() -> Result<(), Box<dyn std::error::Error>> {
    let bus: EventBus<Log, u8> = EventBus::new(&DAMAGE_TIMELINE);
    let mut log = Log::new();
    assert!(bus.emit(&mut log, EventType::HealingResponse, &mut 0)?);
    assert!(log.is_empty());
    Ok(())
}

#[rstest]
#[case(EventType::Activation, HandlerSlot::Announce)]
#[case(EventType::DamageReception, HandlerSlot::DamageReception)]
fn test_undeclared_event_is_rejected(#[case] event: EventType, #[case] slot: HandlerSlot) {
    let mut bus: EventBus<Log, u8> = EventBus::new(&GAME_TIMELINE);
    let result = bus.subscribe(event, slot, "stray", record("stray", Flow::Continue));
    assert!(
        matches!(result, Err(EngineError::UndeclaredEvent(e, "game")) if e == event),
        "subscribing to `{event}` on the game timeline should fail, got `{result:?}`"
    );
    let emitted = bus.emit(&mut Log::new(), event, &mut 0);
    assert!(matches!(emitted, Err(EngineError::UndeclaredEvent(..))));
}

#[rstest]
#[case(EventType::GameInit, HandlerSlot::PoisonTrigger)]
#[case(EventType::TurnEnd, HandlerSlot::BeforeAction)]
fn test_undeclared_slot_is_rejected(#[case] event: EventType, #[case] slot: HandlerSlot) {
    let mut bus: EventBus<Log, u8> = EventBus::new(&GAME_TIMELINE);
    let result = bus.subscribe(event, slot, "stray", record("stray", Flow::Continue));
    assert!(
        matches!(result, Err(EngineError::UndeclaredSlot { .. })),
        "slot `{slot:?}` of `{event}` should be rejected, got `{result:?}`"
    );
}

#[rstest]
fn test_unsubscribe_by_name() -> Result<(), Box<dyn std::error::Error>> {
    let mut bus: EventBus<Log, u8> = EventBus::new(&GAME_TIMELINE);
    bus.subscribe(EventType::TurnEnd, HandlerSlot::TurnEnd, "reset", record("reset a", Flow::Continue))?;
    bus.subscribe(EventType::TurnEnd, HandlerSlot::TurnEnd, "keep", record("keep", Flow::Continue))?;
    bus.subscribe(EventType::TurnEnd, HandlerSlot::TurnEnd, "reset", record("reset b", Flow::Continue))?;

    assert_eq!(bus.unsubscribe(EventType::TurnEnd, "reset"), 2);
    assert_eq!(bus.unsubscribe(EventType::RoundStart, "reset"), 0);

    let mut log = Log::new();
    bus.emit(&mut log, EventType::TurnEnd, &mut 0)?;
    assert_eq!(log, vec!["keep"]);
    Ok(())
}

#[rstest]
fn test_priorities_are_totally_ordered() -> Result<(), Box<dyn std::error::Error>> {
    let mut bus: EventBus<Log, u8> = EventBus::new(&DAMAGE_TIMELINE);
    let late = bus.subscribe(EventType::DamageReception, HandlerSlot::ReceptionAbility, "late", record("late", Flow::Continue))?;
    let early = bus.subscribe(EventType::DamageReception, HandlerSlot::DamageReception, "early", record("early", Flow::Continue))?;
    let again = bus.subscribe(EventType::DamageReception, HandlerSlot::DamageReception, "again", record("again", Flow::Continue))?;
    assert!(early < again);
    assert!(again < late);
    Ok(())
}
