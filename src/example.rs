//! Boolean assignments ("examples") and their algebra.
//!
//! An [`Example`] maps every variable of some universe to a truth value.
//! The learners manipulate counterexamples through three operations:
//!
//! - [`Example::true_vars`]: the variables mapped to true,
//! - [`Example::false_vars`]: the variables mapped to false,
//! - [`Example::intersect`]: the pointwise AND of two examples over the same domain.
//!
//! # Examples
//!
//! ```
//! use horn_rs::example::Example;
//!
//! let x: Example = [("a", true), ("b", true), ("c", false)].into_iter().collect();
//! let y: Example = [("a", true), ("b", false), ("c", true)].into_iter().collect();
//!
//! let z = x.intersect(&y).unwrap();
//! assert_eq!(z.true_vars().len(), 1);
//! assert_eq!(z.to_string(), "{a: 1, b: 0, c: 0}");
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::clause::Clause;
use crate::error::{HornError, Result};
use crate::types::Var;

/// A total assignment of truth values over a set of variables.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Example {
    values: BTreeMap<Var, bool>,
}

impl Example {
    /// Creates an empty example (over the empty domain).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables in the domain.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sets the value of a variable, extending the domain if needed.
    pub fn set(&mut self, var: impl Into<Var>, value: bool) {
        self.values.insert(var.into(), value);
    }

    /// Value of `var`, or `None` if it is outside the domain.
    pub fn get(&self, var: &str) -> Option<bool> {
        self.values.get(var).copied()
    }

    /// Value of `var`, failing if it is outside the domain.
    pub fn value(&self, var: &Var) -> Result<bool> {
        self.values
            .get(var)
            .copied()
            .ok_or_else(|| HornError::UnknownVariable(var.clone()))
    }

    /// The variables of the domain, in sorted order.
    pub fn domain(&self) -> impl Iterator<Item = &Var> + '_ {
        self.values.keys()
    }

    /// `(variable, value)` pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, bool)> + '_ {
        self.values.iter().map(|(v, &b)| (v, b))
    }

    /// Variables mapped to true.
    pub fn true_vars(&self) -> BTreeSet<Var> {
        self.iter().filter(|&(_, b)| b).map(|(v, _)| v.clone()).collect()
    }

    /// Variables mapped to false.
    pub fn false_vars(&self) -> BTreeSet<Var> {
        self.iter().filter(|&(_, b)| !b).map(|(v, _)| v.clone()).collect()
    }

    /// Pointwise AND of two examples.
    ///
    /// Both examples must be defined over exactly the same variables,
    /// otherwise [`HornError::DomainMismatch`] is returned.
    pub fn intersect(&self, other: &Example) -> Result<Example> {
        if !self.domain().eq(other.domain()) {
            return Err(HornError::DomainMismatch);
        }
        let values = self
            .values
            .iter()
            .zip(other.values.values())
            .map(|((v, &a), &b)| (v.clone(), a && b))
            .collect();
        Ok(Example { values })
    }

    /// Whether every antecedent variable of `clause` is true here.
    pub fn covers<C: Clause>(&self, clause: &C) -> bool {
        clause.antecedent().iter().all(|v| self.get(v.name()) == Some(true))
    }

    /// Whether this example satisfies the premise of `clause` but not its conclusion.
    pub fn violates<C: Clause>(&self, clause: &C) -> Result<bool> {
        if !self.covers(clause) {
            return Ok(false);
        }
        Ok(!clause.conclusion_holds(self)?)
    }
}

impl<V: Into<Var>> FromIterator<(V, bool)> for Example {
    fn from_iter<I: IntoIterator<Item = (V, bool)>>(iter: I) -> Self {
        let values = iter.into_iter().map(|(v, b)| (v.into(), b)).collect();
        Example { values }
    }
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (v, b)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", v, b as u8)?;
        }
        write!(f, "}}")
    }
}
