use indexmap::IndexMap;
use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Position, value::Value},
};

/// The variable store of one interpretation run.
///
/// The language has a single flat scope, so the store is a plain mapping from
/// name to value. Entries keep the order of their first assignment, which is
/// also the order in which [`Display`](std::fmt::Display) prints them.
///
/// A `Memory` is owned by the evaluation context of one run and handed back
/// to the caller when the run ends; separate runs never share a store.
///
/// # Example
/// ```
/// use pascalite::interpreter::{lexer::Position, memory::Memory, value::Value};
///
/// let mut memory = Memory::new();
/// memory.set("a", Value::Integer(1));
/// memory.set("a", Value::Real(2.5));
///
/// assert_eq!(memory.get("a", Position::default()), Ok(Value::Real(2.5)));
/// assert!(memory.get("b", Position::default()).is_err());
/// assert_eq!(memory.to_string(), "a = 2.5\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Memory {
    data: IndexMap<String, Value>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a variable, failing with `UndefinedVariable` if it was never
    /// assigned.
    pub fn get(&self, name: &str, position: Position) -> EvalResult<Value> {
        self.data
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             position })
    }

    /// Reads a variable without an error for inspection after a run.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.data.get(name).copied()
    }

    /// Inserts or overwrites a variable unconditionally.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        trace!(%name, %value, "store");
        self.data.insert(name, value);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over the bindings in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Value)> {
        self.data.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Memory {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self { data: iter.into_iter()
                         .map(|(name, value)| (name.into(), value))
                         .collect(), }
    }
}

impl std::fmt::Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}
