use std::{
    any::Any,
    error::Error,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tristate_core::{FlagValue, TriState};

/// Shared storage for a registered tristate flag.
///
/// Clones share the same value, so the flag set can write parsed values while
/// the caller keeps a handle to read them.
#[derive(Debug, Clone, Default)]
pub struct TriStateHandle(Arc<Mutex<TriState>>);

impl TriStateHandle {
    pub fn new(value: TriState) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    pub fn get(&self) -> TriState {
        *self.lock()
    }

    pub fn store(&self, value: TriState) {
        *self.lock() = value;
    }

    fn lock(&self) -> MutexGuard<'_, TriState> {
        // A TriState is always valid, so a poisoned lock holds a usable value.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq<TriState> for TriStateHandle {
    fn eq(&self, other: &TriState) -> bool {
        self.get() == *other
    }
}

impl FlagValue for TriStateHandle {
    fn set(&mut self, raw: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let value = TriState::parse(raw)?;
        self.store(value);
        Ok(())
    }

    fn string(&self) -> String {
        self.get().to_string()
    }

    fn type_name(&self) -> &'static str {
        TriState::TYPE_NAME
    }

    fn get(&self) -> Box<dyn Any> {
        Box::new(TriStateHandle::get(self))
    }
}

/// Storage a tristate flag can be bound to.
///
/// Registration stores the default into the target before the flag set takes it.
pub trait TriStateTarget: FlagValue + Send {
    fn store(&mut self, value: TriState);
}

impl TriStateTarget for &mut TriState {
    fn store(&mut self, value: TriState) {
        **self = value;
    }
}

impl TriStateTarget for TriStateHandle {
    fn store(&mut self, value: TriState) {
        TriStateHandle::store(self, value);
    }
}
