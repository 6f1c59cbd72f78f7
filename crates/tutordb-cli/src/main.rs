use facet::Facet;
use figue as args;

mod commands;
mod config;
mod error;

use commands::AlterRequest;
use error::CliError;

/// Inspect and check the typed mirror of the tutoring database.
#[derive(Facet, Debug)]
struct Cli {
    /// Show version information
    #[facet(args::named, args::short = 'V')]
    version: bool,

    /// Command to run
    #[facet(default, args::subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Facet, Debug)]
#[repr(u8)]
enum Commands {
    /// Print the rendered catalog
    Schema {
        /// Only render this schema
        #[facet(default, args::named)]
        schema: Option<String>,
    },
    /// Collect and verify the catalog
    Check,
    /// Write the rendered catalog to the snapshot file
    Snapshot {
        /// Snapshot path (defaults to the configured one)
        #[facet(default, args::named)]
        output: Option<String>,
        /// Fail if the snapshot differs instead of writing it
        #[facet(args::named)]
        check: bool,
    },
    /// Print `get_table_info` rows for a table as JSON
    Info {
        /// Table name
        #[facet(args::positional)]
        table: String,
        /// Schema (defaults to the configured one)
        #[facet(default, args::named)]
        schema: Option<String>,
    },
    /// Check a JSON record against a table's insert or update payload
    Record {
        /// Table name
        #[facet(args::positional)]
        table: String,
        /// insert or update
        #[facet(args::named)]
        kind: String,
        /// The record, as a JSON object
        #[facet(args::named)]
        data: String,
        /// Schema (defaults to the configured one)
        #[facet(default, args::named)]
        schema: Option<String>,
    },
    /// Build an ALTER TABLE statement and its `execute_ddl` payload
    Alter {
        /// Table name
        #[facet(args::positional)]
        table: String,
        /// add, drop or modify
        #[facet(args::named)]
        operation: String,
        /// Column name
        #[facet(args::named)]
        column: String,
        /// Column type (required for add and modify)
        #[facet(default, args::named, rename = "type")]
        column_type: Option<String>,
        /// Allow NULL values
        #[facet(args::named)]
        nullable: bool,
        /// Default expression
        #[facet(default, args::named)]
        default: Option<String>,
    },
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args_ref: Vec<&str> = args.iter().map(|s| s.as_str()).collect();

    let result: Result<Cli, _> = args::from_slice(&args_ref);

    match result {
        Ok(cli) => {
            if let Err(err) = run(cli) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Err(err) if err.is_help_request() => {
            print!("{}", err.help_text().unwrap_or(""));
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutordb=info".into()),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    if cli.version {
        println!("tutordb {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(command) = cli.command else {
        let config = args::HelpConfig {
            program_name: Some("tutordb".to_string()),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            ..Default::default()
        };
        print!("{}", args::generate_help::<Cli>(&config));
        return Ok(());
    };

    let loaded = config::load()?;
    if let Some(path) = &loaded.path {
        tracing::debug!(path = %path.display(), "loaded config");
    }

    match command {
        Commands::Schema { schema } => commands::schema(&loaded, schema),
        Commands::Check => commands::check(&loaded),
        Commands::Snapshot { output, check } => commands::snapshot(&loaded, output, check),
        Commands::Info { table, schema } => commands::info(&loaded, &table, schema),
        Commands::Record {
            table,
            kind,
            data,
            schema,
        } => commands::record(&loaded, &table, &kind, &data, schema),
        Commands::Alter {
            table,
            operation,
            column,
            column_type,
            nullable,
            default,
        } => commands::alter(
            &loaded,
            AlterRequest {
                table,
                operation,
                column,
                column_type,
                nullable,
                default,
            },
        ),
    }
}
