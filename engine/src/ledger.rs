use crate::{EngineError, EngineResult};

/// A (gem, crystal) pair, used both as a holding and as an amount to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct JewelCount {
    pub gem: u8,
    pub crystal: u8,
}

impl JewelCount {
    pub fn new(gem: u8, crystal: u8) -> Self {
        Self { gem, crystal }
    }

    pub fn total(&self) -> u8 {
        self.gem + self.crystal
    }
}

impl std::fmt::Display for JewelCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} gem / {} crystal", self.gem, self.crystal)
    }
}

/// Two fungible resource counters under a shared capacity. `gem + crystal <= capacity` holds
/// after every mutation; rejected mutations leave the ledger untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JewelLedger {
    held: JewelCount,
    capacity: u8,
}

impl JewelLedger {
    pub fn new(capacity: u8) -> Self {
        Self {
            held: JewelCount::default(),
            capacity,
        }
    }

    pub fn with_holding(capacity: u8, held: JewelCount) -> EngineResult<Self> {
        let mut ledger = Self::new(capacity);
        ledger.add(held)?;
        Ok(ledger)
    }

    pub fn held(&self) -> JewelCount {
        self.held
    }

    pub fn gem(&self) -> u8 {
        self.held.gem
    }

    pub fn crystal(&self) -> u8 {
        self.held.crystal
    }

    pub fn total(&self) -> u8 {
        self.held.total()
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn room(&self) -> u8 {
        self.capacity.saturating_sub(self.total())
    }

    pub fn can_add(&self, amount: JewelCount) -> bool {
        amount.total() <= self.room()
    }

    pub fn can_remove(&self, amount: JewelCount) -> bool {
        amount.gem <= self.held.gem && amount.crystal <= self.held.crystal
    }

    pub fn add(&mut self, amount: JewelCount) -> EngineResult<()> {
        if !self.can_add(amount) {
            return Err(EngineError::Ledger(format!(
                "cannot add {amount} to {} (capacity {})",
                self.held, self.capacity
            )));
        }
        self.held.gem += amount.gem;
        self.held.crystal += amount.crystal;
        Ok(())
    }

    pub fn remove(&mut self, amount: JewelCount) -> EngineResult<()> {
        if !self.can_remove(amount) {
            return Err(EngineError::Ledger(format!(
                "cannot remove {amount} from {}",
                self.held
            )));
        }
        self.held.gem -= amount.gem;
        self.held.crystal -= amount.crystal;
        Ok(())
    }

    /// Adds as much of `amount` as fits, gems first. Returns what was actually added.
    pub fn add_capped(&mut self, amount: JewelCount) -> JewelCount {
        let gem = amount.gem.min(self.room());
        self.held.gem += gem;
        let crystal = amount.crystal.min(self.room());
        self.held.crystal += crystal;
        JewelCount { gem, crystal }
    }

    /// Every (gem, crystal) pair with `min_total <= gem + crystal <= max_total`, at least
    /// `gem_floor` gems and `crystal_floor` crystals, never exceeding the current holding.
    /// Ordered by total, then by gem count.
    pub fn enumerate_combinations(
        &self,
        min_total: u8,
        max_total: u8,
        gem_floor: u8,
        crystal_floor: u8,
    ) -> Vec<JewelCount> {
        let mut combinations = Vec::new();
        if gem_floor > self.held.gem || crystal_floor > self.held.crystal {
            return combinations;
        }
        let lowest = min_total.max(gem_floor + crystal_floor);
        let highest = max_total.min(self.total());
        for total in lowest..=highest {
            let fewest_gems = gem_floor.max(total.saturating_sub(self.held.crystal));
            let most_gems = self.held.gem.min(total.saturating_sub(crystal_floor));
            for gem in fewest_gems..=most_gems {
                combinations.push(JewelCount::new(gem, total - gem));
            }
        }
        combinations
    }
}

impl std::fmt::Display for JewelLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}; cap {}]", self.held, self.capacity)
    }
}
