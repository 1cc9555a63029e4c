//! Conjunctions of Horn clauses.
//!
//! [`Formula`] is an owned, ordered list of clauses interpreted as their conjunction.
//! The two concrete formula kinds are [`HornFormula`] and [`MetaFormula`]; both (and any
//! other [`Membership`] implementor) can be compared by an
//! [equivalence oracle][crate::oracle::EquivalenceOracle].
//!
//! # Examples
//!
//! ```
//! use horn_rs::clause::HornClause;
//! use horn_rs::formula::{HornFormula, Membership};
//!
//! let f = HornFormula::new(vec![
//!     HornClause::implies(["a", "c"], "d"),
//!     HornClause::implies(["a", "b"], "c"),
//! ]);
//! assert_eq!(f.to_string(), "(a∧c → d)∧(a∧b → c)");
//! assert!(!f.is_member_bits("1110").unwrap());
//! assert!(f.is_member_bits("1111").unwrap());
//! ```

use std::collections::BTreeSet;
use std::fmt;

use num_bigint::BigUint;

use crate::clause::{Clause, HornClause, MetaClause, TOP};
use crate::error::Result;
use crate::example::Example;
use crate::types::Var;
use crate::universe::Universe;

/// Anything that can answer membership queries.
pub trait Membership {
    /// Every variable the formula mentions.
    fn variables(&self) -> BTreeSet<Var>;

    /// Whether `e` satisfies the formula.
    fn is_member(&self, e: &Example) -> Result<bool>;

    /// The sorted universe of the formula.
    fn universe(&self) -> Universe {
        Universe::new(self.variables())
    }

    /// Membership of an assignment given as a bit string over [`Membership::universe`].
    fn is_member_bits(&self, bits: &str) -> Result<bool> {
        let e = self.universe().make_example(bits)?;
        self.is_member(&e)
    }
}

/// A conjunction of clauses of kind `C`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Formula<C> {
    clauses: Vec<C>,
}

/// Conjunction of single-consequent Horn clauses.
pub type HornFormula = Formula<HornClause>;
/// Conjunction of generalized Horn clauses.
pub type MetaFormula = Formula<MetaClause>;

impl<C> Default for Formula<C> {
    fn default() -> Self {
        Self { clauses: Vec::new() }
    }
}

impl<C> Formula<C> {
    pub fn new(clauses: Vec<C>) -> Self {
        Self { clauses }
    }

    /// The empty conjunction, which accepts every assignment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[C] {
        &self.clauses
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.clauses.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, C> {
        self.clauses.iter_mut()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut C> {
        self.clauses.get_mut(index)
    }

    /// Appends a clause, returning its index.
    pub fn push(&mut self, clause: C) -> usize {
        self.clauses.push(clause);
        self.clauses.len() - 1
    }

    /// Replaces the clause at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, clause: C) -> C {
        std::mem::replace(&mut self.clauses[index], clause)
    }

    /// Replaces all clauses at once.
    pub fn set_clauses(&mut self, clauses: Vec<C>) {
        self.clauses = clauses;
    }

    /// Keeps only the clauses for which `keep` returns `Ok(true)`; returns how many were removed.
    ///
    /// On error the formula is left untouched.
    pub fn try_retain<F>(&mut self, mut keep: F) -> Result<usize>
    where
        F: FnMut(&C) -> Result<bool>,
    {
        let mut mask = Vec::with_capacity(self.clauses.len());
        for c in &self.clauses {
            mask.push(keep(c)?);
        }
        let before = self.clauses.len();
        let mut mask = mask.into_iter();
        self.clauses.retain(|_| mask.next().unwrap_or(true));
        Ok(before - self.clauses.len())
    }
}

impl<C: Clause> Formula<C> {
    /// Builds an example from a bit string over the formula's universe.
    pub fn make_example(&self, bits: &str) -> Result<Example> {
        self.universe().make_example(bits)
    }

    /// Number of satisfying assignments over the formula's own universe.
    pub fn model_count(&self) -> Result<BigUint> {
        let universe = self.universe();
        let mut count = BigUint::ZERO;
        for e in universe.assignments() {
            if self.is_member(&e)? {
                count += 1u32;
            }
        }
        Ok(count)
    }
}

impl<C: Clause> Membership for Formula<C> {
    fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        for c in &self.clauses {
            vars.extend(c.variables());
        }
        vars
    }

    fn is_member(&self, e: &Example) -> Result<bool> {
        for c in &self.clauses {
            if !c.is_member(e)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<C> FromIterator<C> for Formula<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, C> IntoIterator for &'a Formula<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl<C: fmt::Display> fmt::Display for Formula<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clauses.is_empty() {
            return write!(f, "{}", TOP);
        }
        for (i, c) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, "∧")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
