#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    GameInit,
    BeforeRoundStart,
    RoundStart,
    BeforeAction,
    ActionPhaseStart,
    DuringActionPhase,
    AfterActionPhase,
    TurnEnd,
    Activation,
    HitDetermination,
    HitResolvedHit,
    HitResolvedMiss,
    DamageCalculation,
    HealingResponse,
    FinalDamageApplication,
    DamageReception,
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventType::GameInit => "game-init",
            EventType::BeforeRoundStart => "before-round-start",
            EventType::RoundStart => "round-start",
            EventType::BeforeAction => "before-action",
            EventType::ActionPhaseStart => "action-phase-start",
            EventType::DuringActionPhase => "during-action-phase",
            EventType::AfterActionPhase => "after-action-phase",
            EventType::TurnEnd => "turn-end",
            EventType::Activation => "activate",
            EventType::HitDetermination => "hit-determination",
            EventType::HitResolvedHit => "hit-determination-resolved:hit",
            EventType::HitResolvedMiss => "hit-determination-resolved:miss",
            EventType::DamageCalculation => "damage-calculation",
            EventType::HealingResponse => "healing-response",
            EventType::FinalDamageApplication => "final-damage-application",
            EventType::DamageReception => "damage-reception",
        };
        write!(f, "{name}")
    }
}

/// Named position inside an event's handler list. Handlers registered into an earlier slot
/// always run before handlers of a later slot; within a slot they run in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerSlot {
    GameInitialization,
    BeforeRoundStart,
    RoundStart,
    BeforeAction,
    PoisonTrigger,
    WeaknessTrigger,
    ActionPhaseStart,
    DuringActionPhase,
    AfterActionPhase,
    TurnEnd,
    Announce,
    ActivationAbility,
    HitDetermination,
    HitAbility,
    MissAbility,
    DamageModifier,
    DamageCalculation,
    HealingResponse,
    FinalDamageApplication,
    DamageReception,
    ReceptionAbility,
}

#[derive(Debug)]
pub struct TimelineEntry {
    pub event: EventType,
    pub slots: &'static [HandlerSlot],
}

#[derive(Debug)]
pub struct Timeline {
    pub name: &'static str,
    pub entries: &'static [TimelineEntry],
}

impl Timeline {
    pub fn entry(&self, event: EventType) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.event == event)
    }

    pub fn declares(&self, event: EventType) -> bool {
        self.entry(event).is_some()
    }

    pub fn slot_position(&self, event: EventType, slot: HandlerSlot) -> Option<usize> {
        self.entry(event)?.slots.iter().position(|s| *s == slot)
    }
}

pub static GAME_TIMELINE: Timeline = Timeline {
    name: "game",
    entries: &[
        TimelineEntry {
            event: EventType::GameInit,
            slots: &[HandlerSlot::GameInitialization],
        },
        TimelineEntry {
            event: EventType::BeforeRoundStart,
            slots: &[HandlerSlot::BeforeRoundStart],
        },
        TimelineEntry {
            event: EventType::RoundStart,
            slots: &[HandlerSlot::RoundStart],
        },
        TimelineEntry {
            event: EventType::BeforeAction,
            slots: &[
                HandlerSlot::BeforeAction,
                HandlerSlot::PoisonTrigger,
                HandlerSlot::WeaknessTrigger,
            ],
        },
        TimelineEntry {
            event: EventType::ActionPhaseStart,
            slots: &[HandlerSlot::ActionPhaseStart],
        },
        TimelineEntry {
            event: EventType::DuringActionPhase,
            slots: &[HandlerSlot::DuringActionPhase],
        },
        TimelineEntry {
            event: EventType::AfterActionPhase,
            slots: &[HandlerSlot::AfterActionPhase],
        },
        TimelineEntry {
            event: EventType::TurnEnd,
            slots: &[HandlerSlot::TurnEnd],
        },
    ],
};

pub static DAMAGE_TIMELINE: Timeline = Timeline {
    name: "damage",
    entries: &[
        TimelineEntry {
            event: EventType::Activation,
            slots: &[HandlerSlot::Announce, HandlerSlot::ActivationAbility],
        },
        TimelineEntry {
            event: EventType::HitDetermination,
            slots: &[HandlerSlot::HitDetermination],
        },
        TimelineEntry {
            event: EventType::HitResolvedHit,
            slots: &[HandlerSlot::HitAbility],
        },
        TimelineEntry {
            event: EventType::HitResolvedMiss,
            slots: &[HandlerSlot::MissAbility],
        },
        TimelineEntry {
            event: EventType::DamageCalculation,
            slots: &[HandlerSlot::DamageModifier, HandlerSlot::DamageCalculation],
        },
        TimelineEntry {
            event: EventType::HealingResponse,
            slots: &[HandlerSlot::HealingResponse],
        },
        TimelineEntry {
            event: EventType::FinalDamageApplication,
            slots: &[HandlerSlot::FinalDamageApplication],
        },
        TimelineEntry {
            event: EventType::DamageReception,
            slots: &[HandlerSlot::DamageReception, HandlerSlot::ReceptionAbility],
        },
    ],
};
