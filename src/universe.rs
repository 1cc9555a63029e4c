//! Variable universes.
//!
//! A [`Universe`] is the sorted, deduplicated list of variables a formula is
//! defined over. It fixes the meaning of bit strings (position `i` is the `i`-th
//! variable) and the order in which all `2^n` assignments are enumerated.

use std::collections::BTreeSet;

use num_bigint::BigUint;

use crate::error::{HornError, Result};
use crate::example::Example;
use crate::types::Var;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Universe {
    vars: Vec<Var>,
}

impl Universe {
    /// Builds a universe from any collection of variables, sorting and deduplicating them.
    pub fn new<V: Into<Var>>(vars: impl IntoIterator<Item = V>) -> Self {
        let vars: BTreeSet<Var> = vars.into_iter().map(Into::into).collect();
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Var> + '_ {
        self.vars.iter()
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.vars.binary_search(var).is_ok()
    }

    /// Position of `var` in the universe, if present.
    pub fn index_of(&self, var: &Var) -> Option<usize> {
        self.vars.binary_search(var).ok()
    }

    /// Checks that every variable of `vars` belongs to the universe.
    pub fn check_subset<'a>(&self, vars: impl IntoIterator<Item = &'a Var>) -> Result<()> {
        for v in vars {
            if !self.contains(v) {
                return Err(HornError::UniverseMismatch(v.clone()));
            }
        }
        Ok(())
    }

    /// Number of assignments over the universe, `2^n`.
    pub fn assignment_count(&self) -> BigUint {
        BigUint::from(1u32) << self.vars.len()
    }

    /// Decodes a bit string: character `i` is the value of the `i`-th variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use horn_rs::universe::Universe;
    ///
    /// let universe = Universe::new(["b", "a", "c"]);
    /// let e = universe.make_example("101").unwrap();
    /// assert_eq!(e.get("a"), Some(true));
    /// assert_eq!(e.get("b"), Some(false));
    /// assert_eq!(e.get("c"), Some(true));
    /// ```
    pub fn make_example(&self, bits: &str) -> Result<Example> {
        let found = bits.chars().count();
        if found != self.vars.len() {
            return Err(HornError::LengthMismatch {
                expected: self.vars.len(),
                found,
            });
        }
        self.vars
            .iter()
            .zip(bits.chars())
            .map(|(v, c)| match c {
                '1' => Ok((v.clone(), true)),
                '0' => Ok((v.clone(), false)),
                other => Err(HornError::InvalidBit(other)),
            })
            .collect()
    }

    /// Encodes an example defined over exactly this universe as a bit string.
    pub fn encode(&self, e: &Example) -> Result<String> {
        if !e.domain().eq(self.vars.iter()) {
            return Err(HornError::DomainMismatch);
        }
        Ok(e.iter().map(|(_, b)| if b { '1' } else { '0' }).collect())
    }

    /// All `2^n` assignments, counting down from all-true to all-false,
    /// with the first variable as the most significant bit.
    pub fn assignments(&self) -> Assignments<'_> {
        Assignments {
            universe: self,
            next: Some(vec![true; self.vars.len()]),
        }
    }
}

impl<V: Into<Var>> FromIterator<V> for Universe {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Universe::new(iter)
    }
}

/// Iterator over every assignment of a [`Universe`], see [`Universe::assignments`].
pub struct Assignments<'a> {
    universe: &'a Universe,
    next: Option<Vec<bool>>,
}

impl Iterator for Assignments<'_> {
    type Item = Example;

    fn next(&mut self) -> Option<Self::Item> {
        let bits = self.next.take()?;
        let example = self.universe.vars.iter().cloned().zip(bits.iter().copied()).collect();

        // Decrement: the lowest set bit is cleared and every bit below it is set.
        if let Some(pos) = bits.iter().rposition(|&b| b) {
            let mut bits = bits;
            bits[pos] = false;
            for b in &mut bits[pos + 1..] {
                *b = true;
            }
            self.next = Some(bits);
        }

        Some(example)
    }
}
