use ahash::AHashMap;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shindan::prelude::*;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// A CLI tool that walks a questionnaire dataset with random answers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing the dataset JSON files
    dataset_dir: String,

    /// Number of random walks to perform
    #[arg(short, long, default_value_t = 1000)]
    walks: usize,

    /// Seed for reproducible walks
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of hub nodes resolved after a single answer
    #[arg(long, default_value_t = DEFAULT_MAX_HUB_HOPS)]
    max_hub_hops: usize,

    /// Attempts at drawing a valid answer before a walk is abandoned
    #[arg(long, default_value_t = 20)]
    attempts: usize,
}

/// How a single walk ended.
enum WalkEnd {
    Completed(String),
    Stuck(String),
    Failed(EngineError),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dataset = Dataset::from_dir(&cli.dataset_dir)?;
    for issue in dataset.lint(TERMINAL_NODE) {
        tracing::warn!(%issue, "Dataset integrity issue");
    }

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    println!("Walking '{}' {} time(s) (seed {})...", cli.dataset_dir, cli.walks, seed);

    let mut wizard = Wizard::builder(dataset)
        .with_max_hub_hops(cli.max_hub_hops)
        .build();

    let start = Instant::now();
    let mut completed = 0;
    let mut risk_levels: AHashMap<String, usize> = AHashMap::new();
    let mut stuck: AHashMap<String, usize> = AHashMap::new();
    let mut failures: AHashMap<String, usize> = AHashMap::new();
    let mut hub_cap_hits = 0;
    let mut total_steps = 0;

    for _ in 0..cli.walks {
        wizard.restart();
        let end = walk(&mut wizard, &mut rng, cli.attempts);
        total_steps += wizard.progress().depth;

        match end {
            WalkEnd::Completed(level) => {
                completed += 1;
                *risk_levels.entry(level).or_default() += 1;
            }
            WalkEnd::Stuck(question_id) => *stuck.entry(question_id).or_default() += 1,
            WalkEnd::Failed(e) => {
                if matches!(e, EngineError::HubChainExceeded { .. }) {
                    hub_cap_hits += 1;
                }
                *failures.entry(e.to_string()).or_default() += 1;
            }
        }
    }
    let duration = start.elapsed();

    println!("\n--- Walk Summary ---");
    println!("Completed walks:      {}/{}", completed, cli.walks);
    println!("Average depth:        {:.1}", total_steps as f64 / cli.walks.max(1) as f64);
    println!("Hub cap exceeded:     {}", hub_cap_hits);
    println!("Duration:             {:?}", duration);

    print_counts("Primary risk levels", &risk_levels);
    print_counts("Questions without a valid random answer", &stuck);
    print_counts("Routing errors", &failures);

    if !failures.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

/// Answers questions at random until the session completes or cannot continue.
fn walk(wizard: &mut Wizard, rng: &mut StdRng, attempts: usize) -> WalkEnd {
    loop {
        let question = match wizard.current_question() {
            Ok(Some(question)) => question.clone(),
            Ok(None) => break,
            Err(e) => return WalkEnd::Failed(e),
        };

        let mut accepted = false;
        for _ in 0..attempts {
            let selection = random_selection(&question, rng);
            match wizard.submit_answer(&selection) {
                Ok(verdict) if verdict.is_valid => {
                    accepted = true;
                    break;
                }
                Ok(_) => continue,
                Err(e) => return WalkEnd::Failed(e),
            }
        }
        if !accepted {
            return WalkEnd::Stuck(question.id);
        }
    }

    match wizard.result_view() {
        Ok(view) => WalkEnd::Completed(view.primary_risk_level),
        Err(e) => WalkEnd::Failed(e),
    }
}

/// Draws a selection the way a user clicking options would build one.
fn random_selection(question: &Question, rng: &mut StdRng) -> Vec<usize> {
    let options = question.options.len();
    if options == 0 {
        return Vec::new();
    }
    match question.kind {
        QuestionKind::SingleChoice => vec![rng.random_range(0..options)],
        QuestionKind::MultipleChoice => {
            let clicks = rng.random_range(1..=options);
            (0..clicks).fold(Vec::new(), |selection, _| {
                toggle_with_exclusivity(question, &selection, rng.random_range(0..options))
            })
        }
    }
}

fn print_counts(title: &str, counts: &AHashMap<String, usize>) {
    if counts.is_empty() {
        return;
    }
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    println!("\n{}:", title);
    for (name, count) in entries {
        println!("  {:>6}  {}", count, name);
    }
}
