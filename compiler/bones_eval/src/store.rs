//! The variable store: the sole mutable state of a running program.

use rustc_hash::FxHashMap;
use std::fmt;

/// Mapping from variable name to signed integer value.
///
/// Entries are created lazily by `clear`, mutated in place, and never
/// removed. Loop bodies operate on a `&mut` borrow of their enclosing
/// scope's store, so every mutation is immediately visible to the caller.
///
/// Mutators return the new value, or `None` when the variable was never
/// `clear`-ed; mapping absence to the `UndefinedVariable` diagnostic is
/// the executor's job, which keeps this type free of line numbers.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct VarStore {
    values: FxHashMap<String, i64>,
}

impl VarStore {
    pub fn new() -> Self {
        VarStore {
            values: FxHashMap::default(),
        }
    }

    /// Set `name` to zero, creating the entry if absent.
    pub fn clear(&mut self, name: &str) {
        self.values.insert(name.to_owned(), 0);
    }

    /// Add one to `name`.
    pub fn increment(&mut self, name: &str) -> Option<i64> {
        let value = self.values.get_mut(name)?;
        *value = value.wrapping_add(1);
        Some(*value)
    }

    /// Subtract one from `name`, with no clamp at zero.
    pub fn decrement(&mut self, name: &str) -> Option<i64> {
        let value = self.values.get_mut(name)?;
        *value = value.wrapping_sub(1);
        Some(*value)
    }

    /// Current value of `name`.
    #[inline]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Whether `name` has been `clear`-ed at least once.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of variables ever created.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Renders the store as a `{x: 2, y: 0}` snapshot, sorted by name so the
/// execution trace is deterministic.
impl fmt::Display for VarStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();

        f.write_str("{")?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {}", self.values[*name])?;
        }
        f.write_str("}")
    }
}
