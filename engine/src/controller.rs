use std::{rc::Rc, sync::mpsc::Sender, time::Instant};

use indexmap::IndexMap;
use models::{Card, TeamColor};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    ActionResolver, CombatantId, DAMAGE_TIMELINE, DamageBus, DamagePipeline, DecisionOracle, Deck,
    EngineError, EngineResult, GAME_TIMELINE, GameBus, JewelCount, JewelLedger, MatchContext,
    MatchEvent, MatchResult, MatchTemplate, RandomOracle, Team, register_abilities,
};

/// Owns a match from setup to the final result. Turns pass round the table in seat order.
pub struct MatchController {
    context: MatchContext,
    seats: Vec<CombatantId>,
    next_seat: usize,
    started: bool,
    pub seed: u64,
    pub source: Option<String>,
}

impl TryFrom<MatchTemplate> for MatchController {
    type Error = anyhow::Error;

    fn try_from(template: MatchTemplate) -> Result<Self, Self::Error> {
        template.validate()?;
        let rules = template.rules.clone();
        let seed = template.seed.unwrap_or_else(rand::random::<u64>);

        let mut deck = match &template.deck {
            Some(ids) => {
                let cards = ids
                    .iter()
                    .map(|id| gamedata::card_by_id(*id))
                    .collect::<anyhow::Result<Vec<Card>>>()?;
                Deck::ordered(cards, StdRng::seed_from_u64(seed))
            }
            None => Deck::shuffled(gamedata::cards()?.to_vec(), StdRng::seed_from_u64(seed)),
        };

        let mut combatants = IndexMap::new();
        let mut initial_deal = Vec::new();
        for (seat, combatant_template) in template.combatant_templates.iter().enumerate() {
            let id = CombatantId(seat);
            let mut combatant = combatant_template
                .create_combatant(id, &rules)
                .map_err(|error| {
                    anyhow::anyhow!("unable to create combatant {combatant_template:?}: {error}")
                })?;
            match &combatant_template.hand {
                Some(ids) => {
                    for card_id in ids {
                        let card = match template.deck {
                            Some(_) => gamedata::card_by_id(*card_id)?,
                            None => deck.take(*card_id).ok_or_else(|| {
                                anyhow::anyhow!("card {card_id} is not in the deck")
                            })?,
                        };
                        combatant.hand.extend([card]);
                    }
                }
                None => initial_deal.push(id),
            }
            combatants.insert(id, combatant);
        }

        let mut teams = IndexMap::new();
        for color in [TeamColor::Red, TeamColor::Blue] {
            let team_template = template.teams.get(color);
            let jewels = JewelLedger::with_holding(
                rules.team_jewel_capacity,
                JewelCount::new(team_template.gem, team_template.crystal),
            )?;
            teams.insert(
                color,
                Team {
                    color,
                    morale: team_template.morale.unwrap_or(rules.starting_morale),
                    grail: team_template.grail,
                    jewels,
                    roster: combatants
                        .values()
                        .filter(|c| c.team == color)
                        .map(|c| c.id)
                        .collect(),
                },
            );
        }

        let seats: Vec<CombatantId> = combatants.keys().copied().collect();
        let mut game_bus = GameBus::new(&GAME_TIMELINE);
        ActionResolver::install(&mut game_bus, &seats)?;
        let mut damage_bus = DamageBus::new(&DAMAGE_TIMELINE);
        DamagePipeline::install(&mut damage_bus)?;
        register_abilities(&mut damage_bus, combatants.values())?;

        let context = MatchContext {
            rules,
            teams,
            combatants,
            deck,
            oracle: Box::new(RandomOracle::seeded(seed.wrapping_add(1))),
            game_bus: Rc::new(game_bus),
            damage_bus: Rc::new(damage_bus),
            outcome: None,
            events: Vec::new(),
            resolutions: 0,
            turn: 0,
            initial_deal,
            event_sender: None,
            stdout_enabled: false,
        };

        Ok(Self {
            context,
            seats,
            next_seat: 0,
            started: false,
            seed,
            source: template.source,
        })
    }
}

impl MatchController {
    pub fn with_oracle(mut self, oracle: impl DecisionOracle + 'static) -> Self {
        self.context.oracle = Box::new(oracle);
        self
    }

    pub fn with_channel(mut self, sender: Sender<MatchEvent>) -> Self {
        self.context.event_sender = Some(sender);
        self
    }

    pub fn with_stdout(mut self) -> Self {
        self.context.stdout_enabled = true;
        self
    }

    pub fn context(&self) -> &MatchContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut MatchContext {
        &mut self.context
    }

    pub fn seats(&self) -> &[CombatantId] {
        &self.seats
    }

    /// Emits game initialisation once; later calls do nothing.
    pub fn start(&mut self) -> EngineResult<()> {
        if self.started {
            return Ok(());
        }
        self.started = true;
        let first = *self
            .seats
            .first()
            .ok_or_else(|| EngineError::Invariant("match has no combatants".to_string()))?;
        for combatant in self.context.combatants.values() {
            tracing::debug!(
                id = %combatant.id,
                name = %combatant.name,
                team = %combatant.team,
                character = %combatant.character,
                "registered combatant"
            );
        }
        ActionResolver::start(&mut self.context, first)
    }

    /// Plays the turn of the next seat.
    pub fn play_turn(&mut self) -> EngineResult<()> {
        self.start()?;
        if self.context.is_over() {
            return Ok(());
        }
        if self.context.turn >= self.context.rules.max_turns {
            return Err(EngineError::TurnLimitExceeded(self.context.rules.max_turns));
        }
        self.context.turn += 1;
        let actor = self.seats[self.next_seat];
        self.next_seat = (self.next_seat + 1) % self.seats.len();
        ActionResolver::run_turn(&mut self.context, actor)
    }

    pub fn run(&mut self) -> EngineResult<MatchResult> {
        let t_start = Instant::now();
        self.start()?;
        let outcome = loop {
            if let Some(outcome) = self.context.outcome {
                break outcome;
            }
            self.play_turn()?;
        };
        Ok(MatchResult {
            outcome,
            turns: self.context.turn,
            events: self.context.events.clone(),
            duration: t_start.elapsed(),
            teams: self.context.teams.values().cloned().collect(),
        })
    }
}
