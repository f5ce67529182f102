use std::rc::Rc;

use indexmap::IndexMap;
use tracing::Level;

use crate::{EngineError, EngineResult, EventType, HandlerSlot, Timeline};

/// Returned by a handler: `Stop` skips the remaining handlers of the emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub type Handler<C, P> = Rc<dyn Fn(&mut C, &mut P) -> EngineResult<Flow>>;

/// Total order of handlers within one event: slot position first, registration second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    pub slot: usize,
    pub sequence: u64,
}

pub struct Subscription<C, P> {
    pub name: String,
    pub slot: HandlerSlot,
    pub priority: Priority,
    handler: Handler<C, P>,
}

impl<C, P> Clone for Subscription<C, P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            slot: self.slot,
            priority: self.priority,
            handler: Rc::clone(&self.handler),
        }
    }
}

/// Priority-ordered publish/subscribe dispatcher bound to one timeline. Emission takes
/// `&self`, so the handler list cannot change while handlers run.
pub struct EventBus<C, P> {
    timeline: &'static Timeline,
    subscriptions: IndexMap<EventType, Vec<Subscription<C, P>>>,
    sequence: u64,
}

impl<C, P> Clone for EventBus<C, P> {
    fn clone(&self) -> Self {
        Self {
            timeline: self.timeline,
            subscriptions: self.subscriptions.clone(),
            sequence: self.sequence,
        }
    }
}

impl<C, P> std::fmt::Debug for EventBus<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (event, subscriptions) in &self.subscriptions {
            let names: Vec<&str> = subscriptions.iter().map(|s| s.name.as_str()).collect();
            map.entry(event, &names);
        }
        map.finish()
    }
}

impl<C, P> EventBus<C, P> {
    pub fn new(timeline: &'static Timeline) -> Self {
        Self {
            timeline,
            subscriptions: IndexMap::new(),
            sequence: 0,
        }
    }

    pub fn timeline(&self) -> &'static Timeline {
        self.timeline
    }

    /// Registers `handler` into `slot` of `event`. Both must be declared by the timeline.
    pub fn subscribe<F>(
        &mut self,
        event: EventType,
        slot: HandlerSlot,
        name: impl Into<String>,
        handler: F,
    ) -> EngineResult<Priority>
    where
        F: Fn(&mut C, &mut P) -> EngineResult<Flow> + 'static,
    {
        if !self.timeline.declares(event) {
            return Err(EngineError::UndeclaredEvent(event, self.timeline.name));
        }
        let position = self
            .timeline
            .slot_position(event, slot)
            .ok_or(EngineError::UndeclaredSlot { event, slot })?;
        let priority = Priority {
            slot: position,
            sequence: self.sequence,
        };
        self.sequence += 1;

        let subscription = Subscription {
            name: name.into(),
            slot,
            priority,
            handler: Rc::new(handler),
        };
        let list = self.subscriptions.entry(event).or_default();
        let index = list.partition_point(|s| s.priority < priority);
        list.insert(index, subscription);
        Ok(priority)
    }

    /// Removes every handler of `event` registered under `name`.
    pub fn unsubscribe(&mut self, event: EventType, name: &str) -> usize {
        let Some(list) = self.subscriptions.get_mut(&event) else {
            return 0;
        };
        let before = list.len();
        list.retain(|s| s.name != name);
        before - list.len()
    }

    pub fn handler_names(&self, event: EventType) -> Vec<&str> {
        self.subscriptions
            .get(&event)
            .map(|list| list.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Runs the handlers of `event` in priority order. Returns `false` when one of them
    /// stopped the emission.
    pub fn emit(&self, context: &mut C, event: EventType, payload: &mut P) -> EngineResult<bool> {
        if !self.timeline.declares(event) {
            return Err(EngineError::UndeclaredEvent(event, self.timeline.name));
        }
        let Some(list) = self.subscriptions.get(&event) else {
            return Ok(true);
        };
        for subscription in list {
            tracing::event!(
                name: "dispatch",
                Level::TRACE,
                %event,
                handler = %subscription.name
            );
            if (subscription.handler)(context, payload)? == Flow::Stop {
                tracing::event!(name: "dispatch stopped", Level::DEBUG, %event, handler = %subscription.name);
                return Ok(false);
            }
        }
        Ok(true)
    }
}
