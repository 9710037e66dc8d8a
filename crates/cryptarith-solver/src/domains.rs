use crate::{Domain, Inconsistency, IntVar};

/// The domains of all variables at one node of the search.
///
/// Propagators read and narrow domains through this type. Every change is
/// recorded so that the propagators watching the changed variable can be
/// scheduled again.
#[derive(Debug, Clone, Default)]
pub struct Domains {
    domains: Vec<Domain>,
    modified: Vec<IntVar>,
}

impl Domains {
    pub(crate) fn push(&mut self, domain: Domain) -> IntVar {
        let var = IntVar::from_index(self.domains.len());
        self.domains.push(domain);
        var
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Returns `true` if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Returns the domain of `var`, or `None` for a foreign handle.
    #[must_use]
    pub fn try_get(&self, var: IntVar) -> Option<&Domain> {
        self.domains.get(var.index())
    }

    /// Returns the domain of `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` does not belong to this store.
    #[must_use]
    pub fn get(&self, var: IntVar) -> &Domain {
        &self.domains[var.index()]
    }

    /// Removes `value` from the domain of `var`.
    ///
    /// # Errors
    ///
    /// Returns [`Inconsistency`] if the domain becomes empty.
    pub fn remove(&mut self, var: IntVar, value: i64) -> Result<bool, Inconsistency> {
        let changed = self.domains[var.index()].remove(value)?;
        self.record(var, changed);
        Ok(changed)
    }

    /// Raises the lower bound of `var` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Inconsistency`] if the domain becomes empty.
    pub fn set_min(&mut self, var: IntVar, value: i64) -> Result<bool, Inconsistency> {
        let changed = self.domains[var.index()].set_min(value)?;
        self.record(var, changed);
        Ok(changed)
    }

    /// Lowers the upper bound of `var` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Inconsistency`] if the domain becomes empty.
    pub fn set_max(&mut self, var: IntVar, value: i64) -> Result<bool, Inconsistency> {
        let changed = self.domains[var.index()].set_max(value)?;
        self.record(var, changed);
        Ok(changed)
    }

    /// Fixes `var` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Inconsistency`] if `value` is not in the domain.
    pub fn assign(&mut self, var: IntVar, value: i64) -> Result<bool, Inconsistency> {
        let changed = self.domains[var.index()].assign(value)?;
        self.record(var, changed);
        Ok(changed)
    }

    /// Takes the variables changed since the last call.
    pub(crate) fn take_modified(&mut self) -> Vec<IntVar> {
        let mut modified = std::mem::take(&mut self.modified);
        modified.sort_unstable();
        modified.dedup();
        modified
    }

    fn record(&mut self, var: IntVar, changed: bool) {
        if changed {
            self.modified.push(var);
        }
    }
}
