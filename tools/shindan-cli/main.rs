use clap::Parser;
use shindan::prelude::*;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Runs a questionnaire dataset from the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing questions.json, decision_tree.json and outcomes.json
    dataset_dir: String,

    /// Replay a JSON file of answers (e.g. `[[1], [0], [1, 2]]`) instead of prompting
    #[arg(short, long)]
    answers: Option<String>,

    /// Maximum number of hub nodes resolved after a single answer
    #[arg(long, default_value_t = DEFAULT_MAX_HUB_HOPS)]
    max_hub_hops: usize,

    /// Keep flags set by later answers when going back
    #[arg(long)]
    keep_flags_on_back: bool,

    /// Only check the dataset for structural problems and exit
    #[arg(long)]
    lint: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = Dataset::from_dir(&cli.dataset_dir)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load dataset: {}", e)));

    let issues = dataset.lint(TERMINAL_NODE);
    if cli.lint {
        report_issues(&issues);
        if !issues.is_empty() {
            std::process::exit(1);
        }
        return;
    }
    for issue in &issues {
        tracing::warn!(%issue, "Dataset integrity issue");
    }

    let rollback = if cli.keep_flags_on_back {
        FlagRollback::Retain
    } else {
        FlagRollback::Restore
    };
    let wizard = Wizard::builder(dataset)
        .with_max_hub_hops(cli.max_hub_hops)
        .with_flag_rollback(rollback)
        .build();

    match cli.answers {
        Some(path) => run_replay(wizard, &path),
        None => run_interactive(wizard),
    }
}

fn report_issues(issues: &[IntegrityIssue]) {
    if issues.is_empty() {
        println!("No integrity issues found.");
        return;
    }
    println!("Found {} integrity issue(s):", issues.len());
    for issue in issues {
        println!("  - {}", issue);
    }
}

/// Submits every recorded answer in order and prints the result view as JSON.
fn run_replay(mut wizard: Wizard, path: &str) {
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read answers file '{}': {}", path, e))
    });
    let answers: Vec<Vec<usize>> = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse answers JSON: {}", e)));

    for (step, selection) in answers.iter().enumerate() {
        let question_id = match wizard.current_question() {
            Ok(Some(question)) => question.id.clone(),
            Ok(None) => exit_with_error(&format!(
                "Questionnaire finished after {} answer(s), but more were given",
                step
            )),
            Err(e) => exit_with_error(&e.to_string()),
        };

        let verdict = wizard
            .submit_answer(selection)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        if !verdict.is_valid {
            let messages: Vec<String> = verdict.errors.iter().map(|e| e.to_string()).collect();
            exit_with_error(&format!(
                "Answer {} {:?} to '{}' is invalid: {}",
                step + 1,
                selection,
                question_id,
                messages.join("; ")
            ));
        }
    }

    let view = wizard.result_view().unwrap_or_else(|e| {
        exit_with_error(&format!(
            "{} ({} answer(s) given)",
            e,
            wizard.progress().answered
        ))
    });
    let output = serde_json::to_string_pretty(&view)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
    println!("{}", output);
}

/// Runs the questionnaire with prompts on stdin/stdout.
fn run_interactive(mut wizard: Wizard) {
    println!("--- Shindan Interactive Mode ---");
    println!("Toggle options by number, press Enter to submit.");
    println!("Commands: 'b' back, 'r' restart, 'q' quit\n");

    let mut selection: Vec<usize> = Vec::new();
    let mut shown_node = String::new();

    loop {
        let question = match wizard.current_question() {
            Ok(Some(question)) => question.clone(),
            Ok(None) => break,
            Err(e) => exit_with_error(&e.to_string()),
        };

        if shown_node != wizard.state().current_node() {
            shown_node = wizard.state().current_node().to_string();
            selection = wizard.current_selection().to_vec();
        }
        print_question(&question, &selection, wizard.progress().depth + 1);

        let input = prompt_for_input("Choice");
        match input.as_str() {
            "q" => return,
            "b" => {
                if !wizard.go_back() {
                    println!("Already at the first question.");
                }
                shown_node.clear();
            }
            "r" => {
                wizard.restart();
                shown_node.clear();
            }
            "" => match wizard.submit_answer(&selection) {
                Ok(verdict) if verdict.is_valid => shown_node.clear(),
                Ok(verdict) => {
                    for error in &verdict.errors {
                        println!("  ! {}", error);
                    }
                }
                Err(e) => exit_with_error(&e.to_string()),
            },
            other => match other.parse::<usize>() {
                Ok(number) if (1..=question.options.len()).contains(&number) => {
                    selection = toggle_with_exclusivity(&question, &selection, number - 1);
                }
                _ => println!(
                    "Invalid choice. Enter an option number between 1 and {}.",
                    question.options.len()
                ),
            },
        }
    }

    match wizard.result_view() {
        Ok(view) => print_result(&view),
        Err(e) => exit_with_error(&e.to_string()),
    }
}

fn print_question(question: &Question, selection: &[usize], step: usize) {
    let hint = match question.kind {
        QuestionKind::SingleChoice => "choose one",
        QuestionKind::MultipleChoice => "choose any",
    };
    println!("\n[{}] {} ({})", step, question.text, hint);
    for (index, option) in question.options.iter().enumerate() {
        let mark = if selection.contains(&index) { "x" } else { " " };
        println!("  [{}] {}: {}", mark, index + 1, option.text);
    }
}

fn print_result(view: &ResultView) {
    println!("\n--- Result ---");
    println!("Primary risk level: {}", view.primary_risk_level);

    let sections = [
        ("Role", &view.grouped_outcomes.role),
        ("Risk level", &view.grouped_outcomes.risk_level),
        ("Obligations", &view.grouped_outcomes.obligation),
    ];
    for (title, outcomes) in sections {
        if outcomes.is_empty() {
            continue;
        }
        println!("\n{}:", title);
        for outcome in outcomes {
            println!("  -> {} (weight {})", outcome.id, outcome.priority_weight);
            if !outcome.text.is_empty() {
                println!("     {}", outcome.text);
            }
        }
    }

    let articles: Vec<String> = view
        .applicable_articles
        .iter()
        .map(|a| a.to_string())
        .collect();
    println!("\nApplicable articles: {}", articles.join(", "));
}

/// Prompts the user and reads one trimmed line. End of input quits.
fn prompt_for_input(prompt_text: &str) -> String {
    let mut line = String::new();

    print!("> {}: ", prompt_text);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to write prompt: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        Ok(0) => std::process::exit(0),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    line.trim().to_string()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
