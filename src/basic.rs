//! Learning single-consequent Horn formulas with an explicit boundary set.
//!
//! The learner keeps a [`Boundary`]: an ordered list of negative examples. The hypothesis
//! is always regenerated from it; each boundary example `s` contributes the clauses
//! `(true(s) → f)` for every variable `f` false in `s`, followed by `(true(s) → 0)`.
//!
//! - A **positive** counterexample `x` removes every hypothesis clause `x` violates.
//! - A **negative** counterexample `x` refines the first boundary example `s` whose
//!   intersection with `x` is still rejected by the target (replacing `s` by that
//!   intersection), or is appended if there is none; then the hypothesis is regenerated.
//!
//! # Examples
//!
//! ```
//! use horn_rs::basic;
//! use horn_rs::clause::HornClause;
//! use horn_rs::formula::HornFormula;
//! use horn_rs::oracle::{BruteForce, EquivalenceOracle};
//!
//! let target = HornFormula::new(vec![
//!     HornClause::implies(["a", "c"], "d"),
//!     HornClause::implies(["a", "b"], "c"),
//! ]);
//! let hypothesis = basic::learn(&target).unwrap();
//! assert!(BruteForce.check(&target, &hypothesis).unwrap().is_equivalent());
//! ```

use log::debug;

use crate::clause::HornClause;
use crate::error::Result;
use crate::example::Example;
use crate::formula::{HornFormula, Membership};
use crate::learner::{Action, Learner, LearnerConfig, Polarity, Step};
use crate::oracle::{BruteForce, Equivalence, EquivalenceOracle};

/// Ordered set of known negative examples.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Boundary {
    entries: Vec<Example>,
}

impl Boundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Example] {
        &self.entries
    }

    /// Incorporates the negative example `x`.
    ///
    /// The first entry `s` such that `s ∧ x` has no more true variables than `s` and is
    /// rejected by `target` is replaced by `s ∧ x` ([`Action::Refine`]). If there is no
    /// such entry, `x` is appended ([`Action::Add`]).
    pub fn absorb<T>(&mut self, x: &Example, target: &T) -> Result<Action>
    where
        T: Membership + ?Sized,
    {
        for (index, s) in self.entries.iter_mut().enumerate() {
            let meet = s.intersect(x)?;
            if meet.true_vars().is_subset(&s.true_vars()) && !target.is_member(&meet)? {
                debug!("refining boundary entry #{}: {} -> {}", index, s, meet);
                *s = meet;
                return Ok(Action::Refine { index });
            }
        }
        debug!("adding boundary entry #{}: {}", self.entries.len(), x);
        self.entries.push(x.clone());
        Ok(Action::Add {
            index: self.entries.len() - 1,
        })
    }

    /// Clauses generated by the boundary, in entry order.
    pub fn clauses(&self) -> Vec<HornClause> {
        let mut clauses = Vec::new();
        for s in &self.entries {
            let premise = s.true_vars();
            for f in s.false_vars() {
                clauses.push(HornClause::implies(premise.iter().cloned(), f));
            }
            clauses.push(HornClause::goal(premise));
        }
        clauses
    }
}

/// Learner for [`HornFormula`] targets.
#[derive(Debug)]
pub struct BasicLearner<'a, T: ?Sized, O = BruteForce> {
    target: &'a T,
    oracle: O,
    config: LearnerConfig,
    boundary: Boundary,
    hypothesis: HornFormula,
    iterations: usize,
}

impl<'a, T> BasicLearner<'a, T>
where
    T: Membership + ?Sized,
{
    pub fn new(target: &'a T) -> Self {
        Self::with_oracle(target, BruteForce, LearnerConfig::default())
    }
}

impl<'a, T, O> BasicLearner<'a, T, O>
where
    T: Membership + ?Sized,
    O: EquivalenceOracle,
{
    pub fn with_oracle(target: &'a T, oracle: O, config: LearnerConfig) -> Self {
        Self {
            target,
            oracle,
            config,
            boundary: Boundary::new(),
            hypothesis: HornFormula::empty(),
            iterations: 0,
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Updates the hypothesis for the counterexample `x`.
    pub fn process(&mut self, x: Example) -> Result<Step> {
        let (polarity, action) = if !self.hypothesis.is_member(&x)? {
            let removed = self.hypothesis.try_retain(|c| Ok(!x.violates(c)?))?;
            debug!("eliminated {} clause(s) violated by {}", removed, x);
            (Polarity::Positive, Action::Eliminate { removed })
        } else {
            let action = self.boundary.absorb(&x, self.target)?;
            self.hypothesis.set_clauses(self.boundary.clauses());
            (Polarity::Negative, action)
        };
        Ok(Step::Updated {
            counterexample: x,
            polarity,
            action,
        })
    }
}

impl<T, O> Learner for BasicLearner<'_, T, O>
where
    T: Membership + ?Sized,
    O: EquivalenceOracle,
{
    type Formula = HornFormula;

    fn config(&self) -> &LearnerConfig {
        &self.config
    }

    fn hypothesis(&self) -> &HornFormula {
        &self.hypothesis
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn step(&mut self) -> Result<Step> {
        self.iterations += 1;
        match self.oracle.check(self.target, &self.hypothesis)? {
            Equivalence::Equivalent => Ok(Step::Converged),
            Equivalence::Counterexample(x) => self.process(x),
        }
    }

    fn into_hypothesis(self) -> HornFormula {
        self.hypothesis
    }
}

/// Learns `target` with the brute-force oracle and no iteration cap.
pub fn learn(target: &HornFormula) -> Result<HornFormula> {
    BasicLearner::new(target).run()
}

/// Learns `target` with the brute-force oracle and the given configuration.
pub fn learn_with(target: &HornFormula, config: LearnerConfig) -> Result<HornFormula> {
    BasicLearner::with_oracle(target, BruteForce, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::HornError;

    fn target() -> HornFormula {
        HornFormula::new(vec![
            HornClause::implies(["a", "c"], "d"),
            HornClause::implies(["a", "b"], "c"),
        ])
    }

    #[test]
    fn test_boundary_clauses() {
        let t = target();
        let mut boundary = Boundary::new();
        boundary.absorb(&t.make_example("1110").unwrap(), &t).unwrap();
        let clauses: Vec<String> = boundary.clauses().iter().map(|c| c.to_string()).collect();
        assert_eq!(clauses, vec!["(a∧b∧c → d)", "(a∧b∧c → 0)"]);
    }

    #[test]
    fn test_first_negative_is_appended() {
        let t = target();
        let mut boundary = Boundary::new();
        let x = t.make_example("1110").unwrap();
        assert_eq!(boundary.absorb(&x, &t).unwrap(), Action::Add { index: 0 });
        assert_eq!(boundary.entries(), &[x]);
    }

    #[test]
    fn test_refine_replaces_in_place() {
        let t = target();
        let mut boundary = Boundary::new();
        boundary.absorb(&t.make_example("1110").unwrap(), &t).unwrap();
        // 1110 ∧ 1101 = 1100, which violates a∧b → c.
        let action = boundary.absorb(&t.make_example("1101").unwrap(), &t).unwrap();
        assert_eq!(action, Action::Refine { index: 0 });
        assert_eq!(boundary.entries(), &[t.make_example("1100").unwrap()]);
    }

    #[test]
    fn test_append_when_intersection_is_positive() {
        let t = target();
        let mut boundary = Boundary::new();
        boundary.absorb(&t.make_example("1100").unwrap(), &t).unwrap();
        // 1100 ∧ 1010 = 1000, which the target accepts.
        let action = boundary.absorb(&t.make_example("1010").unwrap(), &t).unwrap();
        assert_eq!(action, Action::Add { index: 1 });
        assert_eq!(boundary.len(), 2);
    }

    #[test]
    fn test_trace() {
        let t = target();
        let mut learner = BasicLearner::new(&t);
        let mut trace = Vec::new();
        loop {
            match learner.step().unwrap() {
                Step::Converged => break,
                Step::Updated {
                    counterexample,
                    polarity,
                    action,
                } => trace.push((t.universe().encode(&counterexample).unwrap(), polarity, action)),
            }
        }
        use Action::*;
        use Polarity::*;
        assert_eq!(
            trace,
            vec![
                ("1110".to_string(), Negative, Add { index: 0 }),
                ("1111".to_string(), Positive, Eliminate { removed: 1 }),
                ("1101".to_string(), Negative, Refine { index: 0 }),
                ("1111".to_string(), Positive, Eliminate { removed: 1 }),
                ("1010".to_string(), Negative, Add { index: 1 }),
                ("1111".to_string(), Positive, Eliminate { removed: 2 }),
                ("1011".to_string(), Positive, Eliminate { removed: 1 }),
            ]
        );
        assert_eq!(learner.iterations(), 8);
        assert_eq!(learner.hypothesis().to_string(), "(a∧b → c)∧(a∧b → d)∧(a∧c → d)");
    }

    #[test]
    fn test_counterexample_resolved_after_update() {
        let t = target();
        let mut learner = BasicLearner::new(&t);
        while let Step::Updated { counterexample, .. } = learner.step().unwrap() {
            assert_eq!(
                t.is_member(&counterexample).unwrap(),
                learner.hypothesis().is_member(&counterexample).unwrap()
            );
        }
    }

    #[test]
    fn test_learn_converges() {
        let t = target();
        let h = learn(&t).unwrap();
        assert!(BruteForce.check(&t, &h).unwrap().is_equivalent());
    }

    #[test]
    fn test_learn_with_cap() {
        let t = target();
        let config = LearnerConfig::default().with_max_iterations(3);
        assert_eq!(learn_with(&t, config), Err(HornError::NotConverged { iterations: 3 }));
        let config = LearnerConfig::default().with_max_iterations(8);
        assert!(learn_with(&t, config).is_ok());
    }

    #[test]
    fn test_trivial_targets() {
        let tautology = HornFormula::new(vec![HornClause::implies(["a"], "a")]);
        let h = learn(&tautology).unwrap();
        assert!(h.is_empty());

        let contradiction = HornFormula::new(vec![HornClause::goal(Vec::<crate::types::Var>::new())]);
        let h = learn(&contradiction).unwrap();
        assert!(BruteForce.check(&contradiction, &h).unwrap().is_equivalent());
    }
}
