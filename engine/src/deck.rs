use models::{Card, CardId};
use rand::{rngs::StdRng, seq::SliceRandom};

/// Draw pile plus discard pile. The discard pile is shuffled back in when the draw pile runs out.
#[derive(Clone, Debug)]
pub struct Deck {
    // top of the pile is the last element
    draw_pile: Vec<Card>,
    discards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    pub fn shuffled(cards: Vec<Card>, mut rng: StdRng) -> Self {
        let mut draw_pile = cards;
        draw_pile.shuffle(&mut rng);
        Self {
            draw_pile,
            discards: Vec::new(),
            rng,
        }
    }

    /// Keeps `cards` in the given order, first element on top.
    pub fn ordered(cards: Vec<Card>, rng: StdRng) -> Self {
        let mut draw_pile = cards;
        draw_pile.reverse();
        Self {
            draw_pile,
            discards: Vec::new(),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    pub fn discard_len(&self) -> usize {
        self.discards.len()
    }

    /// Draws up to `count` cards. Stops short only when both piles are empty.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            if self.draw_pile.is_empty() {
                if self.discards.is_empty() {
                    tracing::warn!(requested = count, drawn = drawn.len(), "deck exhausted");
                    break;
                }
                self.reshuffle();
            }
            if let Some(card) = self.draw_pile.pop() {
                drawn.push(card);
            }
        }
        drawn
    }

    pub fn recycle(&mut self, card: Card) {
        self.discards.push(card);
    }

    /// Pulls a specific card out of the draw pile.
    pub fn take(&mut self, id: CardId) -> Option<Card> {
        let index = self.draw_pile.iter().position(|c| c.id == id)?;
        Some(self.draw_pile.remove(index))
    }

    fn reshuffle(&mut self) {
        tracing::debug!(cards = self.discards.len(), "reshuffling discards into the deck");
        self.draw_pile.append(&mut self.discards);
        self.draw_pile.shuffle(&mut self.rng);
    }
}
