use std::{rc::Rc, sync::mpsc::Sender};

use indexmap::IndexMap;
use models::{Card, CardId, TeamColor};

use crate::{
    Action, AttackEvent, Combatant, CombatantId, DecisionOracle, Deck, EngineError, EngineResult,
    EventBus, JewelCount, MatchEvent, MatchOutcome, Response, Rules, Team, TurnEvent, WinReason,
    check_member, check_multiple,
};

pub type GameBus = EventBus<MatchContext, TurnEvent>;
pub type DamageBus = EventBus<MatchContext, AttackEvent>;

/// All state of one match plus its collaborators. Every component receives it explicitly.
pub struct MatchContext {
    pub rules: Rules,
    pub teams: IndexMap<TeamColor, Team>,
    pub combatants: IndexMap<CombatantId, Combatant>,
    pub deck: Deck,
    pub oracle: Box<dyn DecisionOracle>,
    pub game_bus: Rc<GameBus>,
    pub damage_bus: Rc<DamageBus>,
    pub outcome: Option<MatchOutcome>,
    pub events: Vec<MatchEvent>,
    pub resolutions: usize,
    pub turn: usize,
    pub initial_deal: Vec<CombatantId>,
    pub event_sender: Option<Sender<MatchEvent>>,
    pub stdout_enabled: bool,
}

impl MatchContext {
    pub fn combatant(&self, id: CombatantId) -> EngineResult<&Combatant> {
        self.combatants
            .get(&id)
            .ok_or(EngineError::UnknownCombatant(id))
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> EngineResult<&mut Combatant> {
        self.combatants
            .get_mut(&id)
            .ok_or(EngineError::UnknownCombatant(id))
    }

    pub fn team(&self, color: TeamColor) -> EngineResult<&Team> {
        self.teams.get(&color).ok_or(EngineError::UnknownTeam(color))
    }

    pub fn team_mut(&mut self, color: TeamColor) -> EngineResult<&mut Team> {
        self.teams
            .get_mut(&color)
            .ok_or(EngineError::UnknownTeam(color))
    }

    pub fn team_of(&self, id: CombatantId) -> EngineResult<TeamColor> {
        Ok(self.combatant(id)?.team)
    }

    /// All seats, starting at `id` and going round the table.
    pub fn seat_order_from(&self, id: CombatantId) -> Vec<CombatantId> {
        let seats: Vec<CombatantId> = self.combatants.keys().copied().collect();
        let start = seats.iter().position(|s| *s == id).unwrap_or(0);
        seats[start..]
            .iter()
            .chain(seats[..start].iter())
            .copied()
            .collect()
    }

    pub fn opponents_of(&self, id: CombatantId) -> EngineResult<Vec<CombatantId>> {
        let team = self.team_of(id)?;
        Ok(self
            .combatants
            .values()
            .filter(|c| c.team != team)
            .map(|c| c.id)
            .collect())
    }

    /// First seat after `id`, going round the table, that sits on the other team.
    pub fn next_opponent_seat(&self, id: CombatantId) -> EngineResult<Option<CombatantId>> {
        let team = self.team_of(id)?;
        for seat in self.seat_order_from(id).into_iter().skip(1) {
            if self.combatant(seat)?.team != team {
                return Ok(Some(seat));
            }
        }
        Ok(None)
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn dispatch(&mut self, event: MatchEvent) {
        if let Some(ref tx) = self.event_sender {
            let _ = tx.send(event.clone());
        }
        if self.stdout_enabled {
            eprintln!("EVENT: {event}");
        }
        self.oracle.broadcast(&event.to_string());
        self.events.push(event);
    }

    pub fn dispatch_log(&mut self, s: String) {
        self.dispatch(MatchEvent::Log(s))
    }

    pub fn adjust_morale(&mut self, color: TeamColor, delta: i32) -> EngineResult<()> {
        let team = self.team_mut(color)?;
        team.morale += delta;
        let morale = team.morale;
        tracing::info!(team = %color, delta, morale, "morale changed");
        self.dispatch(MatchEvent::MoraleChanged(color, morale));
        self.settle(color)
    }

    pub fn add_grail(&mut self, color: TeamColor, amount: u8) -> EngineResult<()> {
        let team = self.team_mut(color)?;
        team.grail = team.grail.saturating_add(amount);
        let grail = team.grail;
        tracing::info!(team = %color, grail, "grail changed");
        self.dispatch(MatchEvent::GrailChanged(color, grail));
        self.settle(color)
    }

    /// Adds jewels to a team pool, silently capped at its capacity.
    pub fn gain_team_jewels(&mut self, color: TeamColor, amount: JewelCount) -> EngineResult<JewelCount> {
        let team = self.team_mut(color)?;
        let gained = team.jewels.add_capped(amount);
        if gained != amount {
            tracing::warn!(team = %color, %amount, %gained, "team jewel gain capped");
            self.dispatch(MatchEvent::Warning(format!(
                "{color} jewel pool is full, {gained} of {amount} kept"
            )));
        }
        if gained.total() > 0 {
            self.dispatch(MatchEvent::JewelsGained(color, gained));
        }
        self.settle(color)?;
        Ok(gained)
    }

    /// Checks the win condition of `color` after one of its counters changed. The first
    /// condition met ends the match; later changes cannot alter the outcome.
    fn settle(&mut self, color: TeamColor) -> EngineResult<()> {
        if self.outcome.is_some() {
            return Ok(());
        }
        let team = self.team(color)?;
        let outcome = if team.is_defeated() {
            Some(MatchOutcome {
                winner: color.inverse(),
                reason: WinReason::MoraleDepleted,
            })
        } else if team.grail >= self.rules.grail_to_win {
            Some(MatchOutcome {
                winner: color,
                reason: WinReason::GrailCompleted,
            })
        } else {
            None
        };
        if let Some(outcome) = outcome {
            tracing::info!(%outcome, "match over");
            self.outcome = Some(outcome);
            self.dispatch(MatchEvent::MatchOver(outcome));
        }
        Ok(())
    }

    pub fn take_card(&mut self, owner: CombatantId, id: CardId) -> EngineResult<Card> {
        self.combatant_mut(owner)?
            .hand
            .remove(id)
            .ok_or(EngineError::CardNotInHand { owner, card: id })
    }

    /// Moves a card from a hand straight to the discard pile.
    pub fn play_card(&mut self, owner: CombatantId, id: CardId) -> EngineResult<Card> {
        let card = self.take_card(owner, id)?;
        self.deck.recycle(card.clone());
        Ok(card)
    }

    /// Deals cards without any overflow handling.
    pub fn deal(&mut self, id: CombatantId, count: usize) -> EngineResult<()> {
        let cards = self.deck.draw(count);
        let drawn = cards.len();
        self.combatant_mut(id)?.hand.extend(cards);
        self.dispatch(MatchEvent::CardsDrawn(id, drawn));
        Ok(())
    }

    /// Draws cards into a hand; if the hand overflows, the owner discards the excess.
    /// Returns how many cards were discarded.
    pub fn draw_cards(&mut self, id: CombatantId, count: usize) -> EngineResult<usize> {
        self.deal(id, count)?;
        let overflow = self.combatant(id)?.hand.overflow();
        if overflow == 0 {
            return Ok(0);
        }
        let candidates = self.combatant(id)?.hand.cards().to_vec();
        let chosen = self.ask_discard(
            id,
            "discard down to the hand limit",
            &candidates,
            overflow,
            overflow,
        )?;
        for card in chosen {
            self.play_card(id, card.id)?;
        }
        self.dispatch(MatchEvent::CardsDiscarded(id, overflow));
        Ok(overflow)
    }

    pub fn ask_action(&mut self, actor: CombatantId, candidates: &[Action]) -> EngineResult<Action> {
        let answer = self.oracle.choose_action(actor, candidates)?;
        check_member(&answer, candidates).map_err(EngineError::OracleContract)?;
        Ok(answer)
    }

    pub fn ask_response(
        &mut self,
        defender: CombatantId,
        candidates: &[Response],
    ) -> EngineResult<Response> {
        let answer = self.oracle.choose_response(defender, candidates)?;
        check_member(&answer, candidates).map_err(EngineError::OracleContract)?;
        Ok(answer)
    }

    pub fn ask_target(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[CombatantId],
    ) -> EngineResult<CombatantId> {
        let answer = self.oracle.choose_target(actor, prompt, candidates)?;
        check_member(&answer, candidates).map_err(EngineError::OracleContract)?;
        Ok(answer)
    }

    pub fn ask_jewels(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[JewelCount],
    ) -> EngineResult<JewelCount> {
        let answer = self.oracle.choose_jewels(actor, prompt, candidates)?;
        check_member(&answer, candidates).map_err(EngineError::OracleContract)?;
        Ok(answer)
    }

    pub fn ask_amount(&mut self, actor: CombatantId, prompt: &str, candidates: &[u8]) -> EngineResult<u8> {
        let answer = self.oracle.choose_amount(actor, prompt, candidates)?;
        check_member(&answer, candidates).map_err(EngineError::OracleContract)?;
        Ok(answer)
    }

    pub fn ask_yes_no(&mut self, actor: CombatantId, prompt: &str) -> EngineResult<bool> {
        Ok(self.oracle.choose_yes_no(actor, prompt)?)
    }

    pub fn ask_discard(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[Card],
        min: usize,
        max: usize,
    ) -> EngineResult<Vec<Card>> {
        let answer = self
            .oracle
            .choose_multiple(actor, prompt, candidates, min, max)?;
        check_multiple(&answer, candidates, min, max).map_err(EngineError::OracleContract)?;
        Ok(answer)
    }

    pub fn notify(&mut self, actor: CombatantId, message: &str) {
        self.oracle.notify(actor, message)
    }
}
