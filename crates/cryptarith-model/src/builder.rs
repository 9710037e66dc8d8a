//! Translation of equations into constraints.
//!
//! For a puzzle such as `SEND+MORE=MONEY` in base 10 the builder posts:
//!
//! - one all-distinct constraint over the digit variables of all letters,
//! - per word, a value variable tied to its letters by
//!   `SEND = 1000*S + 100*E + 10*N + D`,
//! - per word, `S != 0` for the leading letter,
//! - per equation, `SEND + MORE = MONEY` over the value variables.

use std::collections::BTreeMap;

use cryptarith_core::{Base, Equation, Puzzle, Word};

use crate::{CompileError, ConstraintSolver, LetterRegistry, Solution, SolvedWord};

/// Returns the positional weights of a word with `len` letters.
///
/// The last letter has weight 1 and every letter weighs `base` times its
/// right neighbour. Returns `None` if a weight overflows `i64`.
///
/// # Examples
///
/// ```
/// use cryptarith_core::Base;
/// use cryptarith_model::positional_weights;
///
/// assert_eq!(positional_weights(4, Base::DECIMAL), Some(vec![1000, 100, 10, 1]));
/// assert_eq!(positional_weights(1, Base::DECIMAL), Some(vec![1]));
/// assert_eq!(positional_weights(20, Base::DECIMAL), None);
/// ```
#[must_use]
pub fn positional_weights(len: usize, base: Base) -> Option<Vec<i64>> {
    let radix = i64::from(base.get());
    let mut weights = vec![0; len];
    let mut weight = 1_i64;
    for (i, slot) in weights.iter_mut().rev().enumerate() {
        if i > 0 {
            weight = weight.checked_mul(radix)?;
        }
        *slot = weight;
    }
    Some(weights)
}

/// A word of a compiled equation together with its value variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordVar<V> {
    /// The word.
    pub word: Word,
    /// Variable holding the word's numeric value.
    pub var: V,
}

/// The variables created for a puzzle.
#[derive(Debug, Clone)]
pub struct CompiledModel<V> {
    base: Base,
    registry: LetterRegistry<V>,
    equations: Vec<Vec<WordVar<V>>>,
}

impl<V: Copy> CompiledModel<V> {
    /// Returns the base the model was built for.
    #[must_use]
    pub fn base(&self) -> Base {
        self.base
    }

    /// Returns the letter registry.
    #[must_use]
    pub fn registry(&self) -> &LetterRegistry<V> {
        &self.registry
    }

    /// Returns the word variables of each equation, result word last.
    #[must_use]
    pub fn equations(&self) -> &[Vec<WordVar<V>>] {
        &self.equations
    }

    /// Reads the assignment found by the solver's last search.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::UnassignedVariable`] if a letter or word
    /// variable has no value.
    pub fn read_solution<S>(&self, solver: &S) -> Result<Solution, CompileError<S::Error>>
    where
        S: ConstraintSolver<Var = V> + ?Sized,
    {
        let unassigned = |name: String| CompileError::<S::Error>::UnassignedVariable { name };

        let assignment = self
            .registry
            .iter()
            .map(|(letter, var)| {
                let digit = solver.value(var).and_then(|value| u32::try_from(value).ok());
                digit
                    .map(|digit| (letter, digit))
                    .ok_or_else(|| unassigned(letter.to_string()))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        let equations = self
            .equations
            .iter()
            .map(|words| {
                words
                    .iter()
                    .map(|WordVar { word, var }| {
                        solver
                            .value(*var)
                            .and_then(|value| u64::try_from(value).ok())
                            .map(|value| SolvedWord::new(word.clone(), value))
                            .ok_or_else(|| unassigned(word.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Solution::new(self.base, assignment, equations))
    }
}

/// Posts the constraints of a puzzle to a solver.
///
/// # Examples
///
/// ```
/// use cryptarith_core::{Base, Puzzle};
/// use cryptarith_model::ModelBuilder;
/// use cryptarith_solver::Store;
///
/// let puzzle: Puzzle = "A+A=BC\nB+B=D".parse()?;
/// let mut store = Store::new();
/// let model = ModelBuilder::new(&mut store, Base::DECIMAL).compile(&puzzle)?;
///
/// assert_eq!(model.registry().len(), 4);
/// assert_eq!(model.equations().len(), 2);
/// // 4 letters and 6 words
/// assert_eq!(store.num_vars(), 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct ModelBuilder<'a, S: ?Sized> {
    solver: &'a mut S,
    base: Base,
}

impl<'a, S> ModelBuilder<'a, S>
where
    S: ConstraintSolver + ?Sized,
{
    /// Creates a builder posting to `solver`.
    pub fn new(solver: &'a mut S, base: Base) -> Self {
        Self { solver, base }
    }

    /// Compiles every equation of `puzzle`.
    ///
    /// All letters are registered first, so the all-distinct constraint
    /// covers every letter of every equation.
    ///
    /// # Errors
    ///
    /// - [`CompileError::WordTooLong`] if a word's weights overflow `i64`
    /// - [`CompileError::Solver`] if the solver rejects a variable or
    ///   constraint, such as the all-distinct constraint of an empty puzzle
    pub fn compile(
        mut self,
        puzzle: &Puzzle,
    ) -> Result<CompiledModel<S::Var>, CompileError<S::Error>> {
        let mut registry = LetterRegistry::new(self.base);
        for letter in puzzle.equations().iter().flat_map(Equation::letters) {
            registry.resolve(self.solver, letter)?;
        }
        log::info!(
            "discovered {} distinct letters in {} equations",
            registry.len(),
            puzzle.equations().len()
        );
        self.solver.post_all_distinct(&registry.variables())?;

        let mut equations = Vec::with_capacity(puzzle.equations().len());
        for equation in puzzle.equations() {
            equations.push(self.compile_equation(&mut registry, equation)?);
        }
        log::debug!(
            "compiled {} letter variables and {} word variables",
            registry.len(),
            equations.iter().map(Vec::len).sum::<usize>()
        );

        Ok(CompiledModel {
            base: self.base,
            registry,
            equations,
        })
    }

    fn compile_equation(
        &mut self,
        registry: &mut LetterRegistry<S::Var>,
        equation: &Equation,
    ) -> Result<Vec<WordVar<S::Var>>, CompileError<S::Error>> {
        let mut words = Vec::with_capacity(equation.words().len());
        for word in equation.words() {
            let var = self.compile_word(registry, word)?;
            words.push(WordVar {
                word: word.clone(),
                var,
            });
        }

        if let Some((result, addends)) = words.split_last() {
            let addends: Vec<_> = addends.iter().map(|word| word.var).collect();
            self.solver.post_sum(&addends, result.var)?;
        }
        Ok(words)
    }

    fn compile_word(
        &mut self,
        registry: &mut LetterRegistry<S::Var>,
        word: &Word,
    ) -> Result<S::Var, CompileError<S::Error>> {
        let weights = positional_weights(word.len(), self.base).ok_or_else(|| {
            CompileError::<S::Error>::WordTooLong {
                word: word.clone(),
                base: self.base,
            }
        })?;
        let digits = word
            .letters()
            .iter()
            .map(|&letter| registry.resolve(self.solver, letter))
            .collect::<Result<Vec<_>, _>>()?;

        let max_int = self.solver.max_int();
        let var = self.solver.new_int_var(&word.to_string(), 0, max_int)?;
        self.solver.post_weighted_sum(&digits, &weights, var)?;
        let leading = registry.resolve(self.solver, word.leading())?;
        self.solver.post_not_equal(leading, 0)?;
        Ok(var)
    }
}
