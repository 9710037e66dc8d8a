//! One digit variable per distinct letter.

use std::collections::HashMap;

use cryptarith_core::{Base, Letter};
use crate::ConstraintSolver;

/// Maps each distinct letter of a puzzle to its digit variable.
///
/// The first [`resolve`](Self::resolve) of a letter creates a variable with
/// domain `0..base`; later calls return the same handle, so every occurrence
/// of a letter in every equation shares one variable.
///
/// # Examples
///
/// ```
/// use cryptarith_core::{Base, Letter};
/// use cryptarith_model::LetterRegistry;
/// use cryptarith_solver::Store;
///
/// let mut store = Store::new();
/// let mut registry = LetterRegistry::new(Base::DECIMAL);
/// let a = Letter::new('A').unwrap();
///
/// let first = registry.resolve(&mut store, a)?;
/// let second = registry.resolve(&mut store, a)?;
/// assert_eq!(first, second);
/// assert_eq!(registry.len(), 1);
/// assert_eq!(store.num_vars(), 1);
/// # Ok::<(), cryptarith_solver::ModelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LetterRegistry<V> {
    base: Base,
    vars: Vec<(Letter, V)>,
    index: HashMap<Letter, usize>,
}

impl<V: Copy> LetterRegistry<V> {
    /// Creates an empty registry for puzzles in `base`.
    #[must_use]
    pub fn new(base: Base) -> Self {
        Self {
            base,
            vars: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the digit variable of `letter`, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver rejects the new variable.
    pub fn resolve<S>(&mut self, solver: &mut S, letter: Letter) -> Result<V, S::Error>
    where
        S: ConstraintSolver<Var = V> + ?Sized,
    {
        if let Some(var) = self.get(letter) {
            return Ok(var);
        }
        let var = solver.new_int_var(&letter.to_string(), 0, self.base.max_digit())?;
        self.index.insert(letter, self.vars.len());
        self.vars.push((letter, var));
        log::trace!("letter {letter} gets a new digit variable");
        Ok(var)
    }

    /// Returns the digit variable of `letter` if it was already resolved.
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<V> {
        self.index.get(&letter).map(|&i| self.vars[i].1)
    }

    /// Returns the base digit variables range over.
    #[must_use]
    pub fn base(&self) -> Base {
        self.base
    }

    /// Returns the number of distinct letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no letter was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns `true` if there are more letters than digits.
    ///
    /// Such a puzzle cannot be solved since all letters need distinct digits.
    #[must_use]
    pub fn exceeds_base(&self) -> bool {
        !self.base.has_distinct_digits_for(self.len())
    }

    /// Returns the digit variables in discovery order.
    #[must_use]
    pub fn variables(&self) -> Vec<V> {
        self.vars.iter().map(|&(_, var)| var).collect()
    }

    /// Iterates over letters and their variables in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, V)> + '_ {
        self.vars.iter().copied()
    }
}
