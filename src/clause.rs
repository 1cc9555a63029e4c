//! Horn clauses in two flavours.
//!
//! - [`HornClause`]: a conjunction of variables implying a single variable,
//!   or implying false ([`Consequent::Bottom`]).
//! - [`MetaClause`]: a conjunction of variables implying a *set* of variables;
//!   an empty set means "implies false".
//!
//! Both implement [`Clause`], which is all that membership evaluation and the
//! [`covers`][Example::covers] / [`violates`][Example::violates] predicates need.
//!
//! # Display
//!
//! Clauses render as `(a∧b → c)`. An empty antecedent renders as `1` and a false
//! conclusion renders as `0`.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::Result;
use crate::example::Example;
use crate::types::Var;
use crate::universe::Universe;

/// Rendering of the empty antecedent.
pub const TOP: &str = "1";
/// Rendering of a false conclusion.
pub const BOTTOM: &str = "0";

/// Common interface of both clause kinds.
pub trait Clause: fmt::Display {
    /// The variables whose conjunction forms the premise.
    fn antecedent(&self) -> &BTreeSet<Var>;

    /// Whether the conclusion of the clause holds under `e`, ignoring the premise.
    fn conclusion_holds(&self, e: &Example) -> Result<bool>;

    /// Every variable mentioned by the clause.
    fn variables(&self) -> BTreeSet<Var>;

    /// Whether `e` satisfies the clause.
    fn is_member(&self, e: &Example) -> Result<bool> {
        for v in self.antecedent() {
            if !e.value(v)? {
                return Ok(true);
            }
        }
        self.conclusion_holds(e)
    }
}

fn write_conjunction(f: &mut fmt::Formatter<'_>, vars: &BTreeSet<Var>, empty: &str) -> fmt::Result {
    if vars.is_empty() {
        return write!(f, "{}", empty);
    }
    for (i, v) in vars.iter().enumerate() {
        if i > 0 {
            write!(f, "∧")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

fn var_set<V: Into<Var>>(vars: impl IntoIterator<Item = V>) -> BTreeSet<Var> {
    vars.into_iter().map(Into::into).collect()
}

/// Conclusion of a [`HornClause`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Consequent {
    /// The premise implies this variable.
    Atom(Var),
    /// The premise implies false.
    Bottom,
}

/// A Horn clause with a single-variable (or false) conclusion.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HornClause {
    pub antecedent: BTreeSet<Var>,
    pub consequent: Consequent,
}

impl HornClause {
    pub fn new<V: Into<Var>>(antecedent: impl IntoIterator<Item = V>, consequent: Consequent) -> Self {
        Self {
            antecedent: var_set(antecedent),
            consequent,
        }
    }

    /// `antecedent → head`.
    pub fn implies<V: Into<Var>>(antecedent: impl IntoIterator<Item = V>, head: impl Into<Var>) -> Self {
        Self::new(antecedent, Consequent::Atom(head.into()))
    }

    /// `antecedent → 0`.
    pub fn goal<V: Into<Var>>(antecedent: impl IntoIterator<Item = V>) -> Self {
        Self::new(antecedent, Consequent::Bottom)
    }

    pub fn is_goal(&self) -> bool {
        self.consequent == Consequent::Bottom
    }
}

impl Clause for HornClause {
    fn antecedent(&self) -> &BTreeSet<Var> {
        &self.antecedent
    }

    fn conclusion_holds(&self, e: &Example) -> Result<bool> {
        match &self.consequent {
            Consequent::Atom(v) => e.value(v),
            Consequent::Bottom => Ok(false),
        }
    }

    fn variables(&self) -> BTreeSet<Var> {
        let mut vars = self.antecedent.clone();
        if let Consequent::Atom(v) = &self.consequent {
            vars.insert(v.clone());
        }
        vars
    }
}

impl fmt::Display for HornClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_conjunction(f, &self.antecedent, TOP)?;
        match &self.consequent {
            Consequent::Atom(v) => write!(f, " → {})", v),
            Consequent::Bottom => write!(f, " → {})", BOTTOM),
        }
    }
}

/// A generalized Horn clause: `antecedent → ⋀ consequent`.
///
/// The empty consequent encodes "implies false".
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct MetaClause {
    pub antecedent: BTreeSet<Var>,
    pub consequent: BTreeSet<Var>,
}

impl MetaClause {
    pub fn new<A: Into<Var>, C: Into<Var>>(
        antecedent: impl IntoIterator<Item = A>,
        consequent: impl IntoIterator<Item = C>,
    ) -> Self {
        Self {
            antecedent: var_set(antecedent),
            consequent: var_set(consequent),
        }
    }

    /// `antecedent → 0`.
    pub fn goal<V: Into<Var>>(antecedent: impl IntoIterator<Item = V>) -> Self {
        Self {
            antecedent: var_set(antecedent),
            consequent: BTreeSet::new(),
        }
    }

    pub fn is_goal(&self) -> bool {
        self.consequent.is_empty()
    }

    /// The canonical negative example of the clause: true exactly on the antecedent.
    pub fn negex(&self, universe: &Universe) -> Example {
        universe
            .iter()
            .map(|v| (v.clone(), self.antecedent.contains(v)))
            .collect()
    }

    /// Narrows the consequent so that the positive example `x` no longer violates the clause.
    ///
    /// A goal clause gets the variables true in `x` outside its antecedent (`negex` is the
    /// clause's canonical negative example); any other clause keeps only the consequent
    /// variables true in `x`.
    pub fn reduce(&mut self, x: &Example, negex: &Example) {
        let positive = x.true_vars();
        self.consequent = if self.consequent.is_empty() {
            positive.intersection(&negex.false_vars()).cloned().collect()
        } else {
            self.consequent.intersection(&positive).cloned().collect()
        };
    }

    /// Shrinks the premise to the true variables of `meet` (the intersection of `negex` with
    /// the negative example `x`).
    ///
    /// Antecedent variables dropped because they are false in `x` move into the consequent,
    /// unless the clause is a goal clause, which stays one.
    pub fn refine(&mut self, x: &Example, meet: &Example, negex: &Example) {
        if !self.consequent.is_empty() {
            let dropped: BTreeSet<Var> = x.false_vars().intersection(&negex.true_vars()).cloned().collect();
            self.consequent.extend(dropped);
        }
        self.antecedent = meet.true_vars();
    }
}

impl Clause for MetaClause {
    fn antecedent(&self) -> &BTreeSet<Var> {
        &self.antecedent
    }

    fn conclusion_holds(&self, e: &Example) -> Result<bool> {
        if self.consequent.is_empty() {
            return Ok(false);
        }
        for v in &self.consequent {
            if !e.value(v)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn variables(&self) -> BTreeSet<Var> {
        self.antecedent.union(&self.consequent).cloned().collect()
    }
}

impl fmt::Display for MetaClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_conjunction(f, &self.antecedent, TOP)?;
        write!(f, " → ")?;
        write_conjunction(f, &self.consequent, BOTTOM)?;
        write!(f, ")")
    }
}
