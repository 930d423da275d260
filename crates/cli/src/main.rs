use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use wishlist_core::{
    database_location_from_env_value, CoreConfig, DatabaseLocation, Place, PlaceId,
    SqlitePlaceStore, WishlistResult, WishlistService,
};

#[derive(Parser)]
#[command(name = "wishlist")]
#[command(about = "Travel wishlist CLI")]
struct Cli {
    /// SQLite database file (defaults to WISHLIST_DB_PATH, then wishlist.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List places not yet visited
    List,
    /// List places already visited
    Visited,
    /// Add a place to the wishlist
    Add {
        /// Place name
        name: String,
        /// Record the place as already visited
        #[arg(long)]
        visited: bool,
    },
    /// Mark a place visited
    Visit {
        /// Place id, as shown by `list`
        id: i64,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'wishlist --help' for commands");
        return Ok(ExitCode::SUCCESS);
    };

    let database = match cli.db {
        Some(path) => DatabaseLocation::File(path),
        None => database_location_from_env_value(std::env::var("WISHLIST_DB_PATH").ok())?,
    };
    let service = wishlist_core::open_service(&CoreConfig::new(database))?;

    // The failure has already been reported on stderr.
    match run(&service, command) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

fn run(service: &WishlistService<SqlitePlaceStore>, command: Commands) -> WishlistResult<()> {
    match command {
        Commands::List => {
            let places = service
                .list_unvisited()
                .inspect_err(|e| eprintln!("Error listing places: {}", e))?;
            if places.is_empty() {
                println!("You have no places in your wishlist");
            } else {
                print_places(&places);
            }
        }
        Commands::Visited => {
            let places = service
                .list_visited()
                .inspect_err(|e| eprintln!("Error listing visited places: {}", e))?;
            if places.is_empty() {
                println!("You have not visited any places yet");
            } else {
                print_places(&places);
            }
        }
        Commands::Add { name, visited } => {
            let place = service
                .add_place(&name, visited)
                .inspect_err(|e| eprintln!("Error adding place: {}", e))?;
            println!("Added {} with ID: {}", place.name, place.id);
        }
        Commands::Visit { id } => {
            let place = service
                .mark_visited(PlaceId::new(id))
                .inspect_err(|e| eprintln!("Error marking place visited: {}", e))?;
            println!("Marked {} (ID: {}) as visited", place.name, place.id);
        }
    }
    Ok(())
}

fn print_places(places: &[Place]) {
    for place in places {
        println!("ID: {}, Name: {}", place.id, place.name);
    }
}
