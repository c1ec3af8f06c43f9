use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use studylog::application::{
    add_entry, edit_entry, export_to_file, import_from_file, init::init, ConfigService,
    EntryStore, FormOverrides,
};
use studylog::cli::{format_totals, Cli, Commands, CounterArgs, TerminalPresenter};
use studylog::error::StudyLogError;
use studylog::infrastructure::{
    Config, Confirmation, FileSystemRepository, Preapproved, StudyLogRepository,
    TerminalConfirmation,
};
use tracing_subscriber::{fmt, EnvFilter};

type Store = EntryStore<FileSystemRepository, TerminalPresenter>;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so rendered output on stdout stays clean. Filter from STUDYLOG_LOG.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("STUDYLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn open_store() -> Result<(Store, Config), StudyLogError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let store = EntryStore::new(repo, config.storage_key.clone(), TerminalPresenter);
    Ok((store, config))
}

fn confirmation(yes: bool) -> Box<dyn Confirmation> {
    if yes {
        Box::new(Preapproved(true))
    } else {
        Box::new(TerminalConfirmation)
    }
}

fn overrides(date: Option<String>, counters: CounterArgs) -> FormOverrides {
    FormOverrides {
        date,
        physics: counters.physics,
        chemistry: counters.chemistry,
        maths: counters.maths,
        mocks: counters.mocks,
    }
}

fn run(cli: Cli) -> Result<(), StudyLogError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let config = init(&path)?;
            println!("Initialized studylog at {}", path.display());
            println!("Storage key: {}", config.storage_key);
            Ok(())
        }
        Some(Commands::Show) | None => {
            let (mut store, _) = open_store()?;
            store.render();
            Ok(())
        }
        Some(Commands::Add { date, counters }) => {
            let (mut store, _) = open_store()?;
            let today = Local::now().date_naive();
            let entry = add_entry(&mut store, today, overrides(date, counters))?;
            println!("\nSaved {}", entry.date);
            Ok(())
        }
        Some(Commands::Edit { date, counters }) => {
            let (mut store, _) = open_store()?;
            let entry = edit_entry(&mut store, &date, overrides(None, counters))?;
            println!("\nSaved {}", entry.date);
            Ok(())
        }
        Some(Commands::Remove { date, yes }) => {
            // Exact match against the stored date string, no format check
            let (mut store, _) = open_store()?;
            let prompt = format!("Delete entry for {}?", date);
            if !confirmation(yes).confirm(&prompt)? {
                println!("Cancelled");
                return Ok(());
            }
            if !store.remove_by_date(&date)? {
                println!("\nNo entry for {}", date);
            }
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            let (mut store, _) = open_store()?;
            if !store.clear_all(confirmation(yes).as_mut())? {
                println!("Cancelled");
            }
            Ok(())
        }
        Some(Commands::Export { path }) => {
            let (store, config) = open_store()?;
            let path = path.unwrap_or_else(|| PathBuf::from(&config.export_file));
            if path.as_os_str() == "-" {
                println!("{}", store.export_text()?);
            } else {
                let count = export_to_file(&store, &path)?;
                println!("Exported {} entries to {}", count, path.display());
            }
            Ok(())
        }
        Some(Commands::Import { path }) => {
            let (mut store, _) = open_store()?;
            import_from_file(&mut store, &path)?;
            println!("\nImport successful");
            Ok(())
        }
        Some(Commands::Totals) => {
            let (store, _) = open_store()?;
            println!("{}", format_totals(&store.totals()));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("export_file = {}", config.export_file);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: studylog config [--list | <key> [<value>]]");
                println!("Valid keys: storage_key, export_file, created");
                Ok(())
            }
        }
    }
}
