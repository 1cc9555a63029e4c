use clap::{Parser, ValueEnum};

use horn_rs::basic::BasicLearner;
use horn_rs::clause::{HornClause, MetaClause};
use horn_rs::formula::{HornFormula, MetaFormula};
use horn_rs::learner::{Learner, LearnerConfig};
use horn_rs::meta::MetaLearner;
use horn_rs::oracle::BruteForce;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Variant {
    /// Single-consequent clauses with a boundary set.
    Basic,
    /// Generalized clauses with multi-variable consequents.
    Meta,
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Learner to run.
    #[arg(value_enum, default_value = "basic")]
    variant: Variant,

    /// Give up after this many equivalence queries.
    #[clap(long, value_name = "INT")]
    max_iterations: Option<usize>,

    /// Log level of the trace.
    #[clap(long, value_name = "LEVEL", default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = LearnerConfig {
        max_iterations: args.max_iterations,
    };

    let time_total = std::time::Instant::now();

    match args.variant {
        Variant::Basic => {
            let target = HornFormula::new(vec![
                HornClause::implies(["a", "c"], "d"),
                HornClause::implies(["a", "b"], "c"),
            ]);
            println!("Target formula: {}", target);
            let learner = BasicLearner::with_oracle(&target, BruteForce, config);
            let hypothesis = learner.run()?;
            println!("Learned formula: {}", hypothesis);
        }
        Variant::Meta => {
            let target = MetaFormula::new(vec![MetaClause::new(["a", "c"], ["d"]), MetaClause::new(["a", "b"], ["c"])]);
            println!("Target formula: {}", target);
            let learner = MetaLearner::with_oracle(&target, BruteForce, config);
            let hypothesis = learner.run()?;
            println!("Learned formula: {}", hypothesis);
        }
    }

    println!("Done in {:.3} s", time_total.elapsed().as_secs_f64());

    Ok(())
}
