use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use jiff::Timestamp;
use tracing_subscriber::EnvFilter;

use pie_catalog::Catalog;
use pie_catalog::fields::FieldKind;
use pie_catalog::validation::{Confirm, validate};
use pie_cli::config::{self, PieConfig};
use pie_cli::prompt::{FixedAnswer, TerminalConfirm};
use pie_cli::session::Session;
use pie_compose::compose;
use pie_core::models::encounter::EncounterState;
use pie_core::models::field::{FieldId, FieldValue, Section};
use pie_core::models::problem::ProblemKey;
use pie_core::models::signal::{SafetySignal, Severity};
use pie_patterns::PatternTracker;
use pie_patterns::advisories::Advisory;
use pie_patterns::stats::NO_DATA_MESSAGE;
use pie_storage::file::FileStore;
use pie_storage::persistence::Persistence;
use pie_storage::time::time_ago;

#[derive(Parser)]
#[command(name = "pie", version)]
#[command(about = "PIE (Problem, Intervention, Evaluation) note builder for school health offices")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Data directory for patterns, history and drafts
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List problem categories, or the fields of one
    Catalog {
        problem: Option<ProblemKey>,
        /// Print field definitions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check one raw value against the safety limits
    Validate {
        field: FieldId,
        value: String,
        /// Problem whose field definition applies
        #[arg(long)]
        problem: Option<ProblemKey>,
        #[command(flatten)]
        ack: AckArgs,
    },
    /// Build a note from field answers
    Note {
        problem: Option<ProblemKey>,
        /// Intervention answer: FIELD=VALUE, or FIELD alone to tick a checkbox
        #[arg(long = "set", value_name = "FIELD[=VALUE]")]
        set: Vec<String>,
        /// Evaluation answer: FIELD=VALUE, or FIELD alone to tick a checkbox
        #[arg(long = "eval", value_name = "FIELD[=VALUE]")]
        eval: Vec<String>,
        /// Start from the auto-saved draft
        #[arg(long)]
        resume: bool,
        /// Omit the P:/I:/E: labels
        #[arg(long)]
        no_prefix: bool,
        /// Record the note in the usage patterns and clear the draft
        #[arg(long)]
        finalize: bool,
        #[command(flatten)]
        ack: AckArgs,
    },
    /// Compose a note from an encounter state JSON file ("-" for stdin)
    Compose {
        input: PathBuf,
        #[arg(long)]
        no_prefix: bool,
        #[arg(long)]
        finalize: bool,
    },
    /// Show usage statistics
    Stats,
    /// Show current decision-support advisories
    Alerts,
    /// Inspect or discard the auto-saved draft
    Draft {
        #[command(subcommand)]
        action: DraftAction,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum DraftAction {
    Show,
    Clear,
}

#[derive(Subcommand)]
enum ConfigAction {
    Show,
    /// Write a default config file
    Init {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct AckArgs {
    /// Acknowledge every critical value without prompting
    #[arg(long, conflicts_with = "reject")]
    acknowledge: bool,
    /// Reject every critical value without prompting
    #[arg(long)]
    reject: bool,
}

impl AckArgs {
    fn confirmer(&self) -> Box<dyn Confirm> {
        if self.acknowledge {
            Box::new(FixedAnswer(true))
        } else if self.reject {
            Box::new(FixedAnswer(false))
        } else {
            Box::new(TerminalConfirm::new(
                std::io::stdin().lock(),
                std::io::stderr(),
            ))
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config.resolved_data_dir()?,
    };
    let now = Timestamp::now();

    match cli.command {
        Command::Catalog { problem, json } => print_catalog(problem, json)?,
        Command::Validate {
            field,
            value,
            problem,
            ack,
        } => run_validate(field, value, problem, &ack),
        Command::Note {
            problem,
            set,
            eval,
            resume,
            no_prefix,
            finalize,
            ack,
        } => {
            let mut session = open_session(&config, &data_dir);
            if resume {
                match session.resume_draft(now) {
                    Some(draft) => eprintln!("Resumed draft from {}.", time_ago(draft.saved_at, now)),
                    None => eprintln!("No recent draft to resume."),
                }
            }
            if let Some(problem) = problem
                && session.state().problem() != Some(problem)
            {
                session.select_problem(problem, now);
            }
            if no_prefix {
                session.set_structured_prefix(false);
            }

            let mut confirm = ack.confirmer();
            let answers = set
                .iter()
                .map(|raw| (Section::Intervention, raw))
                .chain(eval.iter().map(|raw| (Section::Evaluation, raw)));
            for (section, raw) in answers {
                let (field, value) = parse_answer(raw)?;
                let outcome = session.input(section, field, value, confirm.as_mut(), now)?;
                print_signals(&outcome.signals);
                if outcome.blocked {
                    eprintln!("{field}: critical value not acknowledged; field left blank.");
                }
            }

            finish(&mut session, finalize, now)?;
        }
        Command::Compose {
            input,
            no_prefix,
            finalize,
        } => {
            let state = read_state(&input)?;
            let mut session = open_session(&config, &data_dir).without_autosave();
            session.load_state(state);
            if no_prefix {
                session.set_structured_prefix(false);
            }
            finish(&mut session, finalize, now)?;
        }
        Command::Stats => {
            let mut session = open_session(&config, &data_dir);
            match session.tracker().statistics() {
                None => println!("{NO_DATA_MESSAGE}"),
                Some(stats) => {
                    println!("Total notes created: {}", stats.total_notes);
                    println!("Most common problems:");
                    for share in &stats.problems {
                        println!("  {}: {} ({}%)", share.name, share.count, share.percent);
                    }
                    println!(
                        "Orders verification rate: {}%",
                        stats.orders_verification_percent
                    );
                }
            }
            report_notices(&mut session);
        }
        Command::Alerts => {
            let mut session = open_session(&config, &data_dir);
            let advisories = session.tracker().advisories(now);
            if advisories.is_empty() {
                println!("No advisories.");
            }
            print_advisories(&advisories);
            report_notices(&mut session);
        }
        Command::Draft { action } => {
            let mut session = open_session(&config, &data_dir);
            match action {
                DraftAction::Show => match session.tracker_mut().persistence().load_draft(now) {
                    Some(draft) => {
                        println!("Draft saved {}.\n", time_ago(draft.saved_at, now));
                        println!("{}", compose(&draft.state.sanitized(&Catalog), &Catalog));
                    }
                    None => println!("No recent draft."),
                },
                DraftAction::Clear => {
                    session.reset();
                    println!("Draft cleared.");
                }
            }
            report_notices(&mut session);
        }
        Command::Config { action } => match action {
            ConfigAction::Show => {
                println!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    eyre::bail!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    );
                }
                config::save_config(&config_path, &PieConfig::default())?;
                println!("Wrote {}", config_path.display());
            }
        },
    }

    Ok(())
}

fn init_logging(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn open_session(config: &PieConfig, data_dir: &Path) -> Session<FileStore> {
    let store = FileStore::new(data_dir).with_max_bytes(config.storage.max_bytes);
    let persistence = Persistence::new(store, config.storage.clone());
    let tracker = PatternTracker::load(persistence, config.decision_support.clone());
    Session::new(tracker, config.use_structured_prefix)
}

/// Print the note, or finalize it and print the advisories that follow.
fn finish(session: &mut Session<FileStore>, finalize: bool, now: Timestamp) -> Result<()> {
    if finalize {
        let finalized = session.finalize(now)?;
        println!("{}", finalized.note);
        if !finalized.persisted {
            eprintln!("Note recorded for this session only.");
        }
        print_advisories(&finalized.advisories);
    } else {
        println!("{}", session.note());
    }
    report_notices(session);
    Ok(())
}

/// `FIELD=VALUE` or bare `FIELD`. Checkbox values parse as booleans.
fn parse_answer(raw: &str) -> Result<(FieldId, FieldValue)> {
    let (id, value) = match raw.split_once('=') {
        Some((id, value)) => (id.trim(), Some(value)),
        None => (raw.trim(), None),
    };
    let field: FieldId = id.parse()?;
    let is_checkbox =
        pie_catalog::find_field(field).is_some_and(|spec| spec.kind == FieldKind::Checkbox);

    let value = match (is_checkbox, value) {
        (true, None) => FieldValue::Flag(true),
        (true, Some(flag)) => FieldValue::Flag(
            flag.trim()
                .parse::<bool>()
                .map_err(|_| eyre::eyre!("{field} is a checkbox; expected true or false"))?,
        ),
        (false, Some(text)) => FieldValue::text(text),
        (false, None) => eyre::bail!("{field} needs a value: {field}=VALUE"),
    };
    Ok((field, value))
}

fn read_state(input: &Path) -> Result<EncounterState> {
    let json = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", input.display()))?
    };
    Ok(serde_json::from_str(&json)?)
}

fn run_validate(field: FieldId, value: String, problem: Option<ProblemKey>, ack: &AckArgs) {
    let state = match problem {
        Some(problem) => EncounterState::new().with_problem(problem, &Catalog),
        None => EncounterState::new(),
    };
    let mut confirm = ack.confirmer();
    let result = validate(field, FieldValue::text(value), &state, confirm.as_mut());

    match (&result.accepted, result.blocked) {
        (_, true) => println!("{field}: rejected (critical value not acknowledged)"),
        (Some(FieldValue::Text(text)), false) => println!("{field}: accepted {text}"),
        (Some(FieldValue::Flag(flag)), false) => println!("{field}: accepted {flag}"),
        (None, false) => println!("{field}: left blank"),
    }
    print_signals(&result.signals);
}

fn print_catalog(problem: Option<ProblemKey>, json: bool) -> Result<()> {
    let Some(key) = problem else {
        for definition in pie_catalog::all_problems() {
            println!("{:<12} {}", definition.key().as_str(), definition.name());
        }
        return Ok(());
    };

    let definition = pie_catalog::problem(key);
    if json {
        let fields = serde_json::json!({
            "interventions": definition.interventions(),
            "evaluations": definition.evaluations(),
        });
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    println!("{}", definition.name());
    for section in [Section::Intervention, Section::Evaluation] {
        println!("\n[{section}]");
        for spec in definition.fields(section) {
            println!("  {:<22} {}", spec.id.as_str(), spec.label);
            if !spec.options.is_empty() {
                println!("  {:<22}   options: {}", "", spec.options.join(" | "));
            }
        }
    }
    Ok(())
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Warning => "warning",
        Severity::Critical => "CRITICAL",
    }
}

fn print_signals(signals: &[SafetySignal]) {
    for signal in signals {
        eprintln!(
            "[{}] {}: {}",
            severity_label(signal.severity),
            signal.title,
            signal.message
        );
    }
}

fn print_advisories(advisories: &[Advisory]) {
    for advisory in advisories {
        println!(
            "[{}] {}\n    {}",
            severity_label(advisory.severity),
            advisory.title,
            advisory.message
        );
    }
}

fn report_notices(session: &mut Session<FileStore>) {
    for notice in session.tracker_mut().take_notices() {
        eprintln!("warning: {}", notice.message);
    }
}
