//! Equivalence queries.
//!
//! An [`EquivalenceOracle`] decides whether a hypothesis agrees with the target on
//! every assignment of the target's universe, and otherwise produces an assignment on
//! which they disagree.
//!
//! The provided oracle, [`BruteForce`], sweeps all `2^n` assignments in the order of
//! [`Universe::assignments`] and stops at the first disagreement, so the counterexample
//! it returns is always the first one in that order.
//!
//! # Examples
//!
//! ```
//! use horn_rs::clause::HornClause;
//! use horn_rs::formula::HornFormula;
//! use horn_rs::oracle::{BruteForce, Equivalence, EquivalenceOracle};
//!
//! let target = HornFormula::new(vec![HornClause::implies(["a"], "b")]);
//! let hypothesis = HornFormula::empty();
//!
//! match BruteForce.check(&target, &hypothesis).unwrap() {
//!     Equivalence::Equivalent => unreachable!(),
//!     Equivalence::Counterexample(x) => assert_eq!(x.to_string(), "{a: 1, b: 0}"),
//! }
//! ```

use log::debug;

use crate::error::Result;
use crate::example::Example;
use crate::formula::Membership;
use crate::universe::Universe;

/// Answer to an equivalence query.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Equivalence {
    Equivalent,
    /// An assignment on which target and hypothesis disagree.
    Counterexample(Example),
}

impl Equivalence {
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Equivalence::Equivalent)
    }

    pub fn counterexample(&self) -> Option<&Example> {
        match self {
            Equivalence::Equivalent => None,
            Equivalence::Counterexample(x) => Some(x),
        }
    }
}

pub trait EquivalenceOracle {
    /// Compares `hypothesis` with `target` over the target's universe.
    ///
    /// Fails with [`HornError::UniverseMismatch`][crate::error::HornError::UniverseMismatch]
    /// if the hypothesis mentions a variable outside that universe.
    fn check<T, H>(&self, target: &T, hypothesis: &H) -> Result<Equivalence>
    where
        T: Membership + ?Sized,
        H: Membership + ?Sized;
}

/// Exhaustive equivalence check over every assignment of the target universe.
#[derive(Debug, Copy, Clone, Default)]
pub struct BruteForce;

impl BruteForce {
    /// Sweeps `universe`, returning the first assignment on which `f` and `g` disagree.
    pub fn first_difference<F, G>(universe: &Universe, f: &F, g: &G) -> Result<Option<Example>>
    where
        F: Membership + ?Sized,
        G: Membership + ?Sized,
    {
        debug!("sweeping {} assignments over {} variables", universe.assignment_count(), universe.len());
        for e in universe.assignments() {
            if f.is_member(&e)? != g.is_member(&e)? {
                return Ok(Some(e));
            }
        }
        Ok(None)
    }
}

impl EquivalenceOracle for BruteForce {
    fn check<T, H>(&self, target: &T, hypothesis: &H) -> Result<Equivalence>
    where
        T: Membership + ?Sized,
        H: Membership + ?Sized,
    {
        let universe = target.universe();
        universe.check_subset(&hypothesis.variables())?;
        Ok(match Self::first_difference(&universe, target, hypothesis)? {
            Some(x) => {
                debug!("counterexample {}", x);
                Equivalence::Counterexample(x)
            }
            None => Equivalence::Equivalent,
        })
    }
}
