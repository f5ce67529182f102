use models::{Card, CardId};

#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
    limit: usize,
}

impl Hand {
    pub fn new(limit: usize) -> Self {
        Self {
            cards: Vec::new(),
            limit,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of cards above the limit.
    pub fn overflow(&self) -> usize {
        self.cards.len().saturating_sub(self.limit)
    }

    /// Whether `count` more cards fit without exceeding the limit.
    pub fn can_draw(&self, count: usize) -> bool {
        self.cards.len() + count <= self.limit
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }
}
