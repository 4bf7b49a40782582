use crate::commands::{self, AddArgs, InitArgs, StatsArgs, UpdateArgs};
use crate::infra::Session;
use clap::{Parser, Subcommand};
use jobtrack::activity::ActivityLog;
use jobtrack::config::AppConfig;
use jobtrack::error::AppError;
use jobtrack::telemetry;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "JobTrack",
    about = "Keep track of job applications and how they are going",
    version
)]
struct Cli {
    /// Tracker file to load and save (overrides JOBTRACK_STORE)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    /// Print the activity log before exiting
    #[arg(long, global = true)]
    print_log: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a job application to the tracker
    Add(AddArgs),
    /// Delete the job application with the given ID
    Delete {
        /// ID as shown by `list`
        id: usize,
    },
    /// Update the status of an existing job application
    Update(UpdateArgs),
    /// View all job applications (default command)
    List,
    /// View job application statistics per status
    Stats(StatsArgs),
    /// Delete every job application in the tracker
    Clear,
    /// Start a new, empty tracker, replacing the stored one
    Init(InitArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(store) = cli.store {
        config.storage.path = store;
    }

    let command = cli.command.unwrap_or(Command::List);
    let log = ActivityLog::instance();
    let mut session = match &command {
        Command::Init(args) => Session::fresh(&config.storage, args.name.clone(), log),
        _ => Session::open(&config.storage, log)?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let changed = match command {
        Command::Add(args) => commands::add(&mut session, args, &mut out)?,
        Command::Delete { id } => commands::delete(&mut session, id, &mut out)?,
        Command::Update(args) => commands::update(&mut session, args, &mut out)?,
        Command::List => commands::list(&session, &mut out)?,
        Command::Stats(args) => commands::stats(&session, args, &mut out)?,
        Command::Clear => commands::clear(&mut session, &mut out)?,
        Command::Init(_) => commands::init(&session, &mut out)?,
    };
    if changed {
        session.save()?;
    }

    if cli.print_log {
        session.print_log(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
