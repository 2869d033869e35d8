use clap::Parser;
use kidvest::application::session::{Feedback, Session};
use kidvest::domain::quiz::{QuestionBank, QuizState};
use kidvest::domain::savings::{Badge, SavingsState};
use kidvest::infrastructure::in_memory::InMemoryStateStore;
use kidvest::interfaces::csv::action_reader::ActionReader;
use kidvest::interfaces::json::report_writer::ReportWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Replay a KidVest session from a script of user actions", long_about = None)]
struct Cli {
    /// Actions CSV file (`action,value` rows). Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Initial savings goal, as the child would type it. Clamped to at least 1.
    #[arg(long)]
    goal: Option<String>,

    /// JSON question bank replacing the built-in quiz questions.
    #[arg(long)]
    questions: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let bank = match cli.questions {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            QuestionBank::from_json_reader(file).into_diagnostic()?
        }
        None => QuestionBank::default(),
    };

    let savings = match cli.goal.as_deref() {
        Some(goal) => SavingsState::new().set_goal(goal),
        None => SavingsState::new(),
    };
    let store = InMemoryStateStore::new(savings, QuizState::new(Arc::new(bank)));
    let mut session = Session::new(Box::new(store));

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    for action_result in ActionReader::new(source).actions() {
        match action_result {
            Ok(action) => match session.apply(&action).await {
                Ok(feedback) => print_feedback(&feedback),
                Err(e) => warn!("Error applying action: {}", e),
            },
            Err(e) => warn!("Error reading action: {}", e),
        }
    }

    let report = session.into_report().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_report(&report).into_diagnostic()?;

    Ok(())
}

/// Shows the child what just happened, the way the app's pop-ups would.
fn print_feedback(feedback: &Feedback) {
    match feedback {
        Feedback::Contributed(contribution) => {
            if contribution.goal_reached() {
                eprintln!(
                    "Goal reached! You earned the \"{}\" badge.",
                    Badge::GoalAchiever
                );
            }
        }
        Feedback::GoalSet(_) => {}
        Feedback::Answered(answered) => eprintln!("{}", answered.verdict.message()),
    }
}
