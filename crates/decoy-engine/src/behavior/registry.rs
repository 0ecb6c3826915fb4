//! BehaviorRegistry: per-fake rule list with newest-first resolution.

use std::sync::{Mutex, MutexGuard, PoisonError};

use decoy_core::types::RuleId;

use super::rule::{Behavior, BehaviorRule, RuleSnapshot};
use crate::call::FakeObjectCall;

/// The rule chosen for one call.
#[derive(Clone, Default)]
pub struct Resolution {
    /// The matching rule, or `None` to use the default outcome.
    pub rule_id: Option<RuleId>,
    pub behavior: Option<Behavior>,
}

impl Resolution {
    /// Returns true when no rule matched and the default outcome applies.
    pub fn is_default(&self) -> bool {
        self.rule_id.is_none()
    }
}

/// Ordered behavior rules of one fake.
///
/// Rules are stored in registration order and searched newest first, so
/// reconfiguring a call overrides earlier configuration without erasing it.
#[derive(Default)]
pub struct BehaviorRegistry {
    rules: Mutex<Vec<BehaviorRule>>,
}

impl BehaviorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<BehaviorRule>> {
        self.rules.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `rule` at the front of the search order.
    pub fn register(&self, rule: BehaviorRule) -> RuleId {
        let id = rule.id();
        self.lock().push(rule);
        id
    }

    /// Mutate a registered rule in place. Returns false if it was cleared.
    pub fn update<F: FnOnce(&mut BehaviorRule)>(&self, rule_id: RuleId, f: F) -> bool {
        let mut rules = self.lock();
        match rules.iter_mut().find(|r| r.id() == rule_id) {
            Some(rule) => {
                f(rule);
                true
            }
            None => false,
        }
    }

    /// Find the newest non-exhausted rule matching `call` and consume one
    /// application of it, all under one lock.
    pub fn resolve<C: FakeObjectCall + ?Sized>(&self, call: &C) -> Resolution {
        let mut rules = self.lock();
        let found = rules
            .iter_mut()
            .rev()
            .find(|r| !r.is_exhausted() && r.specification().matches(call));
        match found {
            Some(rule) => {
                rule.consume();
                Resolution {
                    rule_id: Some(rule.id()),
                    behavior: Some(rule.behavior().clone()),
                }
            }
            None => Resolution::default(),
        }
    }

    /// Remove every rule. Returns how many were removed.
    pub fn clear_all(&self) -> usize {
        let mut rules = self.lock();
        let cleared = rules.len();
        rules.clear();
        cleared
    }

    /// Number of registered rules, exhausted ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshots in search order (newest first), exhausted rules included.
    pub fn snapshots(&self) -> Vec<RuleSnapshot> {
        self.lock().iter().rev().map(BehaviorRule::snapshot).collect()
    }
}
