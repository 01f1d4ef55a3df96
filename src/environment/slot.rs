//! Context injection: environment consumer slots

use std::any::type_name;
use std::cell::RefCell;

use super::{EnvironmentKey, EnvironmentValues};

/// A declared environment consumer on a rule or template
///
/// A slot names a key and, once bound, yields that key's value from whichever
/// environment it was last bound to. The engine binds every slot immediately
/// before the owning rule's body is read or the owning template's `apply`
/// runs; rules and templates forward their slots from `bind`.
///
/// Reading an unbound slot panics: it means user code was invoked outside the
/// expansion protocol, which is a contract violation rather than a
/// recoverable error. Rebinding is safe and simply replaces the captured
/// value, so one instance can be reused across expansions with different
/// environments.
pub struct EnvironmentSlot<K: EnvironmentKey> {
    value: RefCell<Option<K::Value>>,
}

impl<K: EnvironmentKey> EnvironmentSlot<K> {
    /// Create an unbound slot
    pub fn new() -> Self {
        Self {
            value: RefCell::new(None),
        }
    }

    /// Capture the key's current value from `env`
    pub fn bind(&self, env: &EnvironmentValues) {
        *self.value.borrow_mut() = Some(env.get::<K>());
    }

    /// The value captured by the most recent `bind`
    ///
    /// # Panics
    ///
    /// Panics if the slot was never bound.
    pub fn get(&self) -> K::Value {
        self.value.borrow().clone().unwrap_or_else(|| {
            panic!(
                "environment slot for `{}` read outside expansion; \
                 slots are only valid inside `body` or `apply`",
                type_name::<K>()
            )
        })
    }
}

impl<K: EnvironmentKey> Default for EnvironmentSlot<K> {
    fn default() -> Self {
        Self::new()
    }
}
