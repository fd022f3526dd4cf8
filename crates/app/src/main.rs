use std::fmt;

use microlearn_core::Clock;
use microlearn_core::model::TopicId;
use services::AppServices;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidTopic { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidTopic { raw } => write!(f, "invalid --topic value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- demo   [--db <sqlite_url>] [--topic <id>]");
    eprintln!("  cargo run -p app -- status [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:microlearn.sqlite3");
    eprintln!("  --topic arrays");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MICROLEARN_DB_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Demo,
    Status,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "demo" => Some(Self::Demo),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

struct Args {
    db_url: String,
    topic: TopicId,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("MICROLEARN_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://microlearn.sqlite3".into(), normalize_sqlite_url);
        let mut topic = TopicId::new("arrays");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--topic" => {
                    let value = require_value(args, "--topic")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidTopic { raw: value });
                    }
                    topic = TopicId::new(value.trim());
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, topic })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// Scripted walk through the whole flow: sign in, read a lesson, take the
/// quiz, show progress and the generated resume. Uses the default simulated
/// latencies, so the pauses are intentional.
async fn run_demo(app: &mut AppServices, topic: &TopicId) -> Result<(), Box<dyn std::error::Error>> {
    if !app.auth().is_logged_in() {
        println!("Signing in with Google...");
        app.auth_mut().google_login().await?;
    }
    let name = app
        .auth()
        .user()
        .map(|u| u.name().to_owned())
        .unwrap_or_default();
    println!("Signed in as {name}");

    println!("Generating lesson for '{topic}'...");
    let flow = app.flow().clone();
    let lesson = flow.open_lesson(topic, app.progress_mut()).await?;
    println!("\n== {} ==\n{}\n", lesson.topic_name, lesson.content);

    println!("Generating quiz...");
    let mut session = flow.start_quiz(topic).await?;
    let total = session.questions().len();
    for i in 0..total {
        let question = session.current_question().clone();
        println!("Q{}/{}: {}", i + 1, total, question.question);
        for (idx, option) in question.options.iter().enumerate() {
            println!("  {idx}) {option}");
        }
        // The demo always picks the right answer.
        session.select_answer(question.correct)?;
        session.next_question();
    }

    let result = flow.submit(&mut session, app.progress_mut()).await?;
    println!(
        "\nSubmitted: {}% ({} questions)",
        result.score, result.total_questions
    );
    println!("Overall progress: {}%", app.progress().get_progress());
    println!("Average quiz score: {}%", app.progress().get_average_score());

    let resume = flow.build_resume(&name, app.progress());
    println!("\n== Resume: {} | {} ==", resume.name, resume.title);
    println!("{}", resume.summary);
    for skill in &resume.skills {
        println!("  - {skill}");
    }

    Ok(())
}

fn run_status(app: &AppServices) {
    match app.auth().user() {
        Some(user) => println!("User: {} <{}>", user.name(), user.email()),
        None => println!("User: (not signed in)"),
    }
    println!("Progress: {}%", app.progress().get_progress());
    for topic in app.progress().topics() {
        let score = topic
            .quiz_score()
            .map_or_else(|| "-".to_owned(), |s| format!("{s}%"));
        let done = if topic.completed() { "x" } else { " " };
        println!(
            "  [{done}] {:<12} score {:>4}  attempts {}",
            topic.id().as_str(),
            score,
            topic.attempts()
        );
    }
    println!(
        "Quizzes taken: {} (average {}%)",
        app.progress().results().len(),
        app.progress().get_average_score()
    );
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Demo,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Demo,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so
    // core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let mut app = AppServices::new_sqlite(&parsed.db_url, Clock::default_clock()).await?;

    match cmd {
        Command::Demo => run_demo(&mut app, &parsed.topic).await,
        Command::Status => {
            run_status(&app);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
