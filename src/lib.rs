//! # horn-rs: exact learning of Horn formulas
//!
//! **`horn-rs`** learns a propositional Horn formula exactly, given a *target* formula that it
//! may only access through two kinds of queries:
//!
//! - **membership**: does an assignment satisfy the target?
//! - **equivalence**: is the current hypothesis equivalent to the target, and if not,
//!   on which assignment do they disagree?
//!
//! The learner starts from the empty hypothesis (which accepts everything) and refines it
//! with every counterexample until the equivalence oracle is satisfied.
//!
//! ## Two learners
//!
//! - **[`basic`]**: single-consequent clauses `(a∧b → c)` / `(a∧b → 0)`. The hypothesis is
//!   regenerated from an explicit boundary set of negative examples.
//! - **[`meta`]**: generalized clauses `(a∧b → c∧d)`. Refinement state lives inside the
//!   clauses themselves.
//!
//! ## Basic Usage
//!
//! ```rust
//! use horn_rs::clause::HornClause;
//! use horn_rs::formula::HornFormula;
//! use horn_rs::oracle::{BruteForce, EquivalenceOracle};
//!
//! // Target: (a∧c → d) ∧ (a∧b → c)
//! let target = HornFormula::new(vec![
//!     HornClause::implies(["a", "c"], "d"),
//!     HornClause::implies(["a", "b"], "c"),
//! ]);
//!
//! let hypothesis = horn_rs::basic::learn(&target).unwrap();
//! assert!(BruteForce.check(&target, &hypothesis).unwrap().is_equivalent());
//! ```
//!
//! ## Core Components
//!
//! - **[`example`]**: assignments and their algebra (true/false sets, intersection).
//! - **[`universe`]**: sorted variable universes, bit-string codec, assignment enumeration.
//! - **[`clause`]** and **[`formula`]**: the two clause kinds and their conjunctions.
//! - **[`oracle`]**: equivalence queries, with a brute-force implementation.
//! - **[`learner`]**: configuration, trace records and the run loop shared by both learners.
//!
//! The learners trace every iteration through the [`log`] facade; install any logger
//! (e.g. `simplelog`) to see it.

pub mod basic;
pub mod clause;
pub mod error;
pub mod example;
pub mod formula;
pub mod learner;
pub mod meta;
pub mod oracle;
pub mod types;
pub mod universe;
