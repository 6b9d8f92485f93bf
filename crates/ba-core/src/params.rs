//! Named numeric behavior parameters.

use std::collections::BTreeMap;

use crate::{CoreError, CoreResult};

/// A behavior's parameter set: parameter name → value.
///
/// Seeded from named defaults when the behavior is built.  The key set is
/// fixed from then on: overrides may only replace values of keys that the
/// defaults already declare, and nothing mutates the set once the behavior
/// exists.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParamSet {
    values: BTreeMap<String, f64>,
}

impl ParamSet {
    /// Build from `(name, default)` pairs.  Later duplicates win.
    pub fn from_defaults<'a, I>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let values = defaults
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect();
        Self { values }
    }

    /// Replace the values of already-declared keys.
    ///
    /// Fails on the first key the defaults do not declare.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        for (name, value) in overrides {
            match self.values.get_mut(name) {
                Some(slot) => *slot = value,
                None => return Err(CoreError::UnknownParam(name.to_owned())),
            }
        }
        Ok(self)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Like [`get`][Self::get], but a missing key is an error.
    pub fn require(&self, name: &str) -> CoreResult<f64> {
        self.get(name).ok_or_else(|| CoreError::UnknownParam(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(name, value)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}
