//! End-to-end learning scenarios.
//!
//! Tests cover the oracle contract, both learners, and the error paths.

use horn_rs::basic::{self, BasicLearner, Boundary};
use horn_rs::clause::{HornClause, MetaClause};
use horn_rs::error::HornError;
use horn_rs::example::Example;
use horn_rs::formula::{HornFormula, Membership, MetaFormula};
use horn_rs::learner::{Action, Learner, LearnerConfig, Step};
use horn_rs::meta;
use horn_rs::oracle::{BruteForce, Equivalence, EquivalenceOracle};

fn horn_target() -> HornFormula {
    HornFormula::new(vec![
        HornClause::implies(["a", "c"], "d"),
        HornClause::implies(["a", "b"], "c"),
    ])
}

fn meta_target() -> MetaFormula {
    MetaFormula::new(vec![MetaClause::new(["a", "c"], ["d"]), MetaClause::new(["a", "b"], ["c"])])
}

// ─── Oracle ────────────────────────────────────────────────────────────────────

#[test]
fn oracle_agrees_with_pointwise_comparison() {
    let f = horn_target();
    let candidates = vec![
        HornFormula::empty(),
        HornFormula::new(vec![HornClause::implies(["a", "c"], "d")]),
        HornFormula::new(vec![HornClause::goal(["a"])]),
        HornFormula::new(vec![
            HornClause::implies(["a", "b"], "c"),
            HornClause::implies(["a", "b"], "d"),
            HornClause::implies(["a", "c"], "d"),
        ]),
    ];
    let universe = f.universe();
    for g in candidates {
        let agree = universe
            .assignments()
            .all(|e| f.is_member(&e).unwrap() == g.is_member(&e).unwrap());
        match BruteForce.check(&f, &g).unwrap() {
            Equivalence::Equivalent => assert!(agree, "{} reported equivalent to {}", g, f),
            Equivalence::Counterexample(x) => {
                assert!(!agree);
                assert_ne!(f.is_member(&x).unwrap(), g.is_member(&x).unwrap());
            }
        }
    }
}

// ─── Basic learner ─────────────────────────────────────────────────────────────

#[test]
fn basic_learner_converges_on_demo_target() {
    let target = horn_target();
    let hypothesis = basic::learn(&target).unwrap();
    assert_eq!(BruteForce.check(&target, &hypothesis).unwrap(), Equivalence::Equivalent);
    let universe = target.universe();
    assert_eq!(universe.len(), 4);
    for e in universe.assignments() {
        assert_eq!(target.is_member(&e).unwrap(), hypothesis.is_member(&e).unwrap());
    }
}

#[test]
fn basic_learner_converges_on_chained_targets() {
    let targets = vec![
        HornFormula::new(vec![HornClause::goal(["a", "b"]), HornClause::implies(["c"], "a")]),
        HornFormula::new(vec![HornClause::implies(["b"], "a"), HornClause::implies(["c"], "b")]),
        HornFormula::new(vec![HornClause::implies(["a", "b"], "c"), HornClause::implies(["c"], "d")]),
    ];
    for target in targets {
        let config = LearnerConfig::default().with_max_iterations(100);
        let hypothesis = basic::learn_with(&target, config).unwrap();
        assert!(BruteForce.check(&target, &hypothesis).unwrap().is_equivalent());
    }
}

#[test]
fn basic_learner_can_cycle_on_unconditional_facts() {
    // Once the boundary entry is all-false, each negative 101 regenerates (1 → a)∧(1 → b)∧(1 → 0)
    // and the following positive examples remove them again.
    let target = HornFormula::new(vec![
        HornClause::implies(Vec::<&str>::new(), "d"),
        HornClause::implies(["a"], "b"),
    ]);
    let config = LearnerConfig::default().with_max_iterations(40);
    assert_eq!(
        basic::learn_with(&target, config),
        Err(HornError::NotConverged { iterations: 40 })
    );
}

#[test]
fn basic_learner_first_negative_is_appended() {
    let target = horn_target();
    let mut learner = BasicLearner::new(&target);
    assert!(learner.boundary().is_empty());
    let step = learner.step().unwrap();
    match step {
        Step::Updated { action, .. } => assert_eq!(action, Action::Add { index: 0 }),
        Step::Converged => panic!("empty hypothesis cannot be equivalent"),
    }
    assert_eq!(learner.boundary().len(), 1);
}

#[test]
fn boundary_generates_one_goal_per_entry() {
    let target = horn_target();
    let mut boundary = Boundary::new();
    boundary.absorb(&target.make_example("1110").unwrap(), &target).unwrap();
    boundary.absorb(&target.make_example("1010").unwrap(), &target).unwrap();
    let goals = boundary.clauses().iter().filter(|c| c.is_goal()).count();
    assert_eq!(goals, boundary.len());
}

// ─── Generalized learner ───────────────────────────────────────────────────────

#[test]
fn meta_membership() {
    let target = meta_target();
    let x: Example = [("a", true), ("b", false), ("c", true), ("d", false)].into_iter().collect();
    let y: Example = [("a", false), ("b", true), ("c", false), ("d", false)].into_iter().collect();
    assert!(!target.is_member(&x).unwrap());
    assert!(target.is_member(&y).unwrap());
}

#[test]
fn meta_learner_converges_on_demo_target() {
    let target = meta_target();
    let hypothesis = meta::learn(&target).unwrap();
    assert!(BruteForce.check(&target, &hypothesis).unwrap().is_equivalent());
    assert_eq!(hypothesis.to_string(), "(a∧b → c∧d)∧(a∧c → d)");
}

#[test]
fn learners_agree_across_representations() {
    let simple = basic::learn(&horn_target()).unwrap();
    let generalized = meta::learn(&meta_target()).unwrap();
    assert!(BruteForce.check(&simple, &generalized).unwrap().is_equivalent());
}

// ─── Errors ────────────────────────────────────────────────────────────────────

#[test]
fn bit_string_length_is_checked() {
    let target = horn_target();
    assert_eq!(
        target.make_example("11111"),
        Err(HornError::LengthMismatch { expected: 4, found: 5 })
    );
}

#[test]
fn intersect_requires_same_domain() {
    let x = horn_target().make_example("1010").unwrap();
    let y = meta_target().universe().assignments().next().unwrap();
    assert!(x.intersect(&y).is_ok());
    let z: Example = [("a", true)].into_iter().collect();
    assert_eq!(x.intersect(&z), Err(HornError::DomainMismatch));
}

#[test]
fn iteration_cap_reports_non_convergence() {
    let target = MetaFormula::new(vec![MetaClause::goal(["a", "b"]), MetaClause::new(Vec::<&str>::new(), ["c"])]);
    let config = LearnerConfig::default().with_max_iterations(25);
    let err = meta::learn_with(&target, config).unwrap_err();
    assert_eq!(err, HornError::NotConverged { iterations: 25 });
    assert_eq!(err.to_string(), "Learner did not converge after 25 iterations");
}
