use clap::Parser;
use vitrine::application::{self, ConfigService};
use vitrine::cli::{output, Cli, Commands};
use vitrine::error::VitrineError;
use vitrine::infrastructure::FileStore;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), VitrineError> {
    match cli.command {
        Some(Commands::Init { path }) => application::init::init(&path),
        Some(Commands::List { tag, limit }) => {
            let store = FileStore::discover()?;
            let config = ConfigService::new(store.clone()).list()?;
            let records = application::list_records(&store, tag.as_deref(), limit)?;
            print!("{}", output::format_record_list(&records, &config.date_format));
            if records.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Tags) => {
            let store = FileStore::discover()?;
            let tags = application::list_tags(&store)?;
            print!("{}", output::format_tag_list(&tags));
            if tags.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let store = FileStore::discover()?;
            let (record, config) = application::show_record(&store, &id)?;
            print!("{}", output::format_record(&record, &config.date_format));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let store = FileStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("store_dir = {}", config.store_dir);
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: vitrine config [--list | <key> [<value>]]");
                println!("Valid keys: store_dir, date_format, created");
                Ok(())
            }
        }
        // Bare invocation shows the front page
        Some(Commands::Feed) | None => {
            let store = FileStore::discover()?;
            let (curation, config) = application::build_feed(&store)?;
            print!("{}", output::format_feed(&curation, &config.date_format));
            Ok(())
        }
    }
}
