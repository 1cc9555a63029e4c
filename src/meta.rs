//! Learning generalized Horn formulas, where a clause implies a set of variables.
//!
//! There is no separate boundary set: each hypothesis clause carries its own refinement
//! state. The canonical negative example of a clause, its [negex][MetaClause::negex], is
//! true exactly on the clause's antecedent.
//!
//! - A **positive** counterexample `x` [reduces][MetaClause::reduce] every clause it
//!   violates.
//! - A **negative** counterexample `x` [refines][MetaClause::refine] the first clause whose
//!   negex, intersected with `x`, is still rejected by the target; if there is none, the
//!   goal clause `(true(x) → 0)` is appended.
//!
//! Unlike the single-consequent learner there is no known termination bound, so callers
//! facing arbitrary targets should set [`LearnerConfig::max_iterations`].

use log::debug;

use crate::clause::MetaClause;
use crate::error::Result;
use crate::example::Example;
use crate::formula::{Membership, MetaFormula};
use crate::learner::{Action, Learner, LearnerConfig, Polarity, Step};
use crate::oracle::{BruteForce, Equivalence, EquivalenceOracle};
use crate::universe::Universe;

/// Learner for [`MetaFormula`] targets.
#[derive(Debug)]
pub struct MetaLearner<'a, T: ?Sized, O = BruteForce> {
    target: &'a T,
    universe: Universe,
    oracle: O,
    config: LearnerConfig,
    hypothesis: MetaFormula,
    iterations: usize,
}

impl<'a, T> MetaLearner<'a, T>
where
    T: Membership + ?Sized,
{
    pub fn new(target: &'a T) -> Self {
        Self::with_oracle(target, BruteForce, LearnerConfig::default())
    }
}

impl<'a, T, O> MetaLearner<'a, T, O>
where
    T: Membership + ?Sized,
    O: EquivalenceOracle,
{
    pub fn with_oracle(target: &'a T, oracle: O, config: LearnerConfig) -> Self {
        Self {
            target,
            universe: target.universe(),
            oracle,
            config,
            hypothesis: MetaFormula::empty(),
            iterations: 0,
        }
    }

    /// Reduces every clause violated by the positive example `x`; returns how many.
    fn reduce(&mut self, x: &Example) -> Result<usize> {
        let mut reduced = 0;
        for (index, c) in self.hypothesis.iter_mut().enumerate() {
            if x.violates(c)? {
                let negex = c.negex(&self.universe);
                c.reduce(x, &negex);
                debug!("reduced clause #{} to {}", index, c);
                reduced += 1;
            }
        }
        Ok(reduced)
    }

    /// Refines the first clause that still generalizes the negative example `x`,
    /// or appends a new goal clause for it.
    fn refine_or_add(&mut self, x: &Example) -> Result<Action> {
        for (index, c) in self.hypothesis.iter_mut().enumerate() {
            let negex = c.negex(&self.universe);
            let meet = negex.intersect(x)?;
            if meet.true_vars().is_subset(&negex.true_vars()) && !self.target.is_member(&meet)? {
                c.refine(x, &meet, &negex);
                debug!("refined clause #{} to {}", index, c);
                return Ok(Action::Refine { index });
            }
        }
        let index = self.hypothesis.push(MetaClause::goal(x.true_vars()));
        debug!("added clause #{}", index);
        Ok(Action::Add { index })
    }

    /// Updates the hypothesis for the counterexample `x`.
    pub fn process(&mut self, x: Example) -> Result<Step> {
        let (polarity, action) = if !self.hypothesis.is_member(&x)? {
            let reduced = self.reduce(&x)?;
            (Polarity::Positive, Action::Reduce { reduced })
        } else {
            (Polarity::Negative, self.refine_or_add(&x)?)
        };
        Ok(Step::Updated {
            counterexample: x,
            polarity,
            action,
        })
    }
}

impl<T, O> Learner for MetaLearner<'_, T, O>
where
    T: Membership + ?Sized,
    O: EquivalenceOracle,
{
    type Formula = MetaFormula;

    fn config(&self) -> &LearnerConfig {
        &self.config
    }

    fn hypothesis(&self) -> &MetaFormula {
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

    fn into_hypothesis(self) -> MetaFormula {
        self.hypothesis
    }
}

/// Learns `target` with the brute-force oracle and no iteration cap.
pub fn learn(target: &MetaFormula) -> Result<MetaFormula> {
    MetaLearner::new(target).run()
}

/// Learns `target` with the brute-force oracle and the given configuration.
pub fn learn_with(target: &MetaFormula, config: LearnerConfig) -> Result<MetaFormula> {
    MetaLearner::with_oracle(target, BruteForce, config).run()
}
