use std::{any::Any, error::Error};

use crate::tristate::TriState;

/// The capabilities a flag parser needs from a flag's storage: set it from
/// raw text, render it, name its type, and hand out the typed value.
///
/// The trait is object safe so flag sets can hold heterogeneous values.
pub trait FlagValue {
    /// Parses `raw` into the value. On error the value is left unchanged.
    fn set(&mut self, raw: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// The current value as text. Must be accepted by [`FlagValue::set`].
    fn string(&self) -> String;

    /// Type label shown in help output, e.g. `TriState`.
    fn type_name(&self) -> &'static str;

    /// The current value, boxed for downcasting by the caller.
    fn get(&self) -> Box<dyn Any>;
}

impl FlagValue for TriState {
    fn set(&mut self, raw: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        TriState::set(self, raw).map_err(Into::into)
    }

    fn string(&self) -> String {
        self.as_str().to_owned()
    }

    fn type_name(&self) -> &'static str {
        TriState::TYPE_NAME
    }

    fn get(&self) -> Box<dyn Any> {
        Box::new(*self)
    }
}

impl<T: FlagValue + ?Sized> FlagValue for &mut T {
    fn set(&mut self, raw: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        (**self).set(raw)
    }

    fn string(&self) -> String {
        (**self).string()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn get(&self) -> Box<dyn Any> {
        (**self).get()
    }
}
