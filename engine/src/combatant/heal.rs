use crate::{EngineError, EngineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealPool {
    amount: u8,
    capacity: u8,
}

impl HealPool {
    pub fn new(amount: u8, capacity: u8) -> EngineResult<Self> {
        if amount > capacity {
            return Err(EngineError::Ledger(format!(
                "heal {amount} exceeds capacity {capacity}"
            )));
        }
        Ok(Self { amount, capacity })
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn spend(&mut self, amount: u8) -> EngineResult<()> {
        if amount > self.amount {
            return Err(EngineError::Ledger(format!(
                "cannot spend {amount} heal from {}",
                self.amount
            )));
        }
        self.amount -= amount;
        Ok(())
    }
}
