use super::{ActiveEffect, EffectKind};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectStore {
    effects: Vec<ActiveEffect>,
}

impl EffectStore {
    pub fn add(&mut self, effect: ActiveEffect) {
        self.effects.push(effect);
    }

    pub fn has(&self, kind: EffectKind) -> bool {
        self.effects.iter().any(|e| e.kind() == kind)
    }

    pub fn count(&self, kind: EffectKind) -> usize {
        self.effects.iter().filter(|e| e.kind() == kind).count()
    }

    /// Removes and returns the oldest effect of `kind`.
    pub fn take(&mut self, kind: EffectKind) -> Option<ActiveEffect> {
        let index = self.effects.iter().position(|e| e.kind() == kind)?;
        Some(self.effects.remove(index))
    }

    /// Removes every effect of `kind`, oldest first.
    pub fn take_all(&mut self, kind: EffectKind) -> Vec<ActiveEffect> {
        let (taken, kept) = std::mem::take(&mut self.effects)
            .into_iter()
            .partition(|e| e.kind() == kind);
        self.effects = kept;
        taken
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
