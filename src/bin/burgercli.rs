use std::path::PathBuf;

use anyhow::Result;
use bb_garnish::{
    config::Config,
    constants::{CONFIG_ENV_VAR, DATABASE_ENV_VAR},
    dump::Dump,
    error::QueryError,
    Client, Store,
};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct CliArgs {
    #[command(subcommand)]
    pub subcommand: Command,

    #[command(flatten)]
    pub global_opts: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    #[arg(short = 'd', long, env = DATABASE_ENV_VAR, global = true, help = "SQLite database file")]
    pub database: Option<PathBuf>,

    #[arg(short = 'c', long, env = CONFIG_ENV_VAR, global = true, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Log at debug level")]
    pub debug: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    #[clap(name = "init", about = "Create the tables if they do not exist")]
    Init,

    #[clap(name = "import", about = "Import a scraper dump")]
    Import { path: PathBuf },

    #[clap(name = "export", about = "Write the store out as a dump")]
    Export { path: PathBuf },

    #[clap(name = "burgers", about = "List all burgers")]
    Burgers,

    #[clap(name = "burger", about = "Get a burger and the restaurants serving it")]
    Burger { id: i64 },

    #[clap(name = "burger-restaurants", about = "Get the restaurants serving a burger")]
    BurgerRestaurants { id: i64 },

    #[clap(name = "restaurants", about = "List all restaurants")]
    Restaurants,

    #[clap(name = "restaurant", about = "Get a restaurant and the burgers it serves")]
    Restaurant { id: i64 },

    #[clap(name = "partners", about = "Get restaurants sharing a burger with a restaurant")]
    Partners { id: i64 },

    #[clap(name = "coordinates", about = "List all restaurant coordinates")]
    Coordinates,

    #[clap(name = "open", about = "List coordinates of restaurants open right now")]
    Open {
        #[arg(
            short = 'o',
            long,
            default_value = "0",
            allow_hyphen_values = true,
            help = "Hours to shift the current time by"
        )]
        offset: String,
    },

    #[clap(name = "search", about = "Search restaurants and burgers")]
    Search {
        #[arg(short = 't', long = "term", help = "Search term, may be repeated")]
        terms: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    let config = match args.global_opts.config.as_deref() {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    let debug = args.global_opts.debug || config.debug;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| (if debug { "debug" } else { "info" }).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let database = args.global_opts.database.unwrap_or(config.database);
    tracing::debug!("using database {}", database.display());
    let store = Store::open(&database).await?;

    let result = run(args.subcommand, &store).await;
    store.close().await;

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => match e.downcast_ref::<QueryError>() {
            Some(query_error) if query_error.is_reportable() => {
                println!("{}", json!({ "message": query_error.to_string() }));
                std::process::exit(1);
            }
            _ => Err(e),
        },
    }
}

async fn run(command: Command, store: &Store) -> Result<Value> {
    let client = Client::new(store.clone());
    let output = match command {
        Command::Init => {
            store.create_schema().await?;
            json!({ "initialized": true })
        }
        Command::Import { path } => {
            store.create_schema().await?;
            let dump = Dump::load(&path).await?;
            let summary = dump.import(store).await?;
            json!({ "imported": summary })
        }
        Command::Export { path } => {
            let dump = Dump::export(store).await?;
            dump.save(&path).await?;
            json!({
                "exported": {
                    "burgers": dump.burgers.len(),
                    "restaurants": dump.restaurants.len(),
                    "serves": dump.serves.len(),
                }
            })
        }
        Command::Burgers => json!({ "burgers": client.all_burgers().await? }),
        Command::Burger { id } => serde_json::to_value(client.burger(id).await?)?,
        Command::BurgerRestaurants { id } => {
            json!({ "restaurants": client.restaurants_for_burger(id).await? })
        }
        Command::Restaurants => json!({ "restaurants": client.all_restaurants().await? }),
        Command::Restaurant { id } => serde_json::to_value(client.restaurant(id).await?)?,
        Command::Partners { id } => json!({ "partners": client.partners(id).await? }),
        Command::Coordinates => json!({ "coordinates": client.coordinates().await? }),
        Command::Open { offset } => {
            json!({ "coordinates": client.open_coordinates(&offset).await? })
        }
        Command::Search { terms } => json!({ "results": client.search(terms.as_slice()).await? }),
    };
    Ok(output)
}
