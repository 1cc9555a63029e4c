//! Plumbing shared by the learners: configuration, the per-iteration [`Step`] record,
//! and the [`Learner`] trait with its run loop.
//!
//! Every iteration of a learner issues one equivalence query. If the oracle reports
//! equivalence the learner has converged; otherwise the counterexample is classified as
//! [positive][Polarity::Positive] (the target accepts it, the hypothesis does not) or
//! [negative][Polarity::Negative] (the other way round) and the hypothesis is updated.
//!
//! Each iteration is traced at `info` level through the [`log`] facade.

use std::fmt;

use log::info;

use crate::error::{HornError, Result};
use crate::example::Example;

/// Configuration of a learning run.
///
/// # Examples
///
/// ```
/// use horn_rs::learner::LearnerConfig;
///
/// let config = LearnerConfig::default().with_max_iterations(100);
/// assert_eq!(config.max_iterations, Some(100));
/// assert_eq!(LearnerConfig::default().max_iterations, None);
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct LearnerConfig {
    /// Maximum number of equivalence queries (default: unbounded).
    pub max_iterations: Option<usize>,
}

impl LearnerConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }
}

/// Which side misclassified a counterexample.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Polarity {
    /// Accepted by the target, rejected by the hypothesis.
    Positive,
    /// Rejected by the target, accepted by the hypothesis.
    Negative,
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
        }
    }
}

/// Hypothesis update performed for a counterexample.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// Clauses violated by a positive counterexample were removed.
    Eliminate { removed: usize },
    /// Consequents of clauses violated by a positive counterexample were narrowed.
    Reduce { reduced: usize },
    /// The entry (boundary example or clause) at `index` was refined in place.
    Refine { index: usize },
    /// A new entry (boundary example or clause) was appended at `index`.
    Add { index: usize },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Eliminate { removed } => write!(f, "eliminated {} clause(s)", removed),
            Action::Reduce { reduced } => write!(f, "reduced {} clause(s)", reduced),
            Action::Refine { index } => write!(f, "refined #{}", index),
            Action::Add { index } => write!(f, "added #{}", index),
        }
    }
}

/// Result of one learner iteration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Step {
    /// The hypothesis is equivalent to the target.
    Converged,
    /// The hypothesis was updated for a counterexample.
    Updated {
        counterexample: Example,
        polarity: Polarity,
        action: Action,
    },
}

/// A counterexample-driven learner.
pub trait Learner {
    type Formula: fmt::Display;

    fn config(&self) -> &LearnerConfig;

    /// The current hypothesis.
    fn hypothesis(&self) -> &Self::Formula;

    /// Number of equivalence queries issued so far.
    fn iterations(&self) -> usize;

    /// Issues one equivalence query and updates the hypothesis if needed.
    fn step(&mut self) -> Result<Step>;

    fn into_hypothesis(self) -> Self::Formula;

    /// Runs [`Learner::step`] until convergence.
    ///
    /// Fails with [`HornError::NotConverged`] once `max_iterations` queries have been
    /// issued without convergence.
    fn run(mut self) -> Result<Self::Formula>
    where
        Self: Sized,
    {
        loop {
            if let Some(max) = self.config().max_iterations {
                if self.iterations() >= max {
                    return Err(HornError::NotConverged {
                        iterations: self.iterations(),
                    });
                }
            }
            let before = self.hypothesis().to_string();
            match self.step()? {
                Step::Converged => {
                    info!("#{}: hypothesis {} converged", self.iterations(), before);
                    return Ok(self.into_hypothesis());
                }
                Step::Updated {
                    counterexample,
                    polarity,
                    action,
                } => {
                    info!(
                        "#{}: hypothesis {}, {} counterexample {}: {}",
                        self.iterations(),
                        before,
                        polarity,
                        counterexample,
                        action
                    );
                }
            }
        }
    }
}
