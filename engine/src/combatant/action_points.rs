use crate::ActionCategory;

/// Per-turn action allowance. A category with no points of its own borrows from `general`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionPoints {
    pub general: u8,
    pub attack: u8,
    pub magic: u8,
    pub special: u8,
}

impl Default for ActionPoints {
    fn default() -> Self {
        Self {
            general: 1,
            attack: 0,
            magic: 0,
            special: 0,
        }
    }
}

impl ActionPoints {
    fn slot(&mut self, category: ActionCategory) -> &mut u8 {
        match category {
            ActionCategory::General => &mut self.general,
            ActionCategory::Attack => &mut self.attack,
            ActionCategory::Magic => &mut self.magic,
            ActionCategory::Special => &mut self.special,
        }
    }

    pub fn get(&self, category: ActionCategory) -> u8 {
        match category {
            ActionCategory::General => self.general,
            ActionCategory::Attack => self.attack,
            ActionCategory::Magic => self.magic,
            ActionCategory::Special => self.special,
        }
    }

    pub fn grant(&mut self, category: ActionCategory, amount: u8) {
        let slot = self.slot(category);
        *slot = slot.saturating_add(amount);
    }

    pub fn can_spend(&self, category: ActionCategory) -> bool {
        self.get(category) > 0 || self.general > 0
    }

    /// Spends one point, preferring `category` over `general`. Returns the category actually
    /// spent, or `None` when neither has a point left.
    pub fn spend(&mut self, category: ActionCategory) -> Option<ActionCategory> {
        for candidate in [category, ActionCategory::General] {
            let slot = self.slot(candidate);
            if *slot > 0 {
                *slot -= 1;
                return Some(candidate);
            }
        }
        None
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for ActionPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "general={} attack={} magic={} special={}",
            self.general, self.attack, self.magic, self.special
        )
    }
}
