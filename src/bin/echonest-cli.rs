use clap::{Parser, Subcommand};
use echonest::{EchonestApi, Options};

#[derive(Parser)]
#[command(name = "echonest-cli")]
#[command(about = "CLI for the Echo Nest artist API", long_about = None)]
struct Cli {
    /// Echo Nest API key (can also be set via ECHONEST_API_KEY env var)
    #[arg(long, env = "ECHONEST_API_KEY")]
    api_key: String,

    /// Limit results
    #[arg(short, long, default_value_t = 10)]
    results: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for artists by name
    Search {
        /// Artist name to search for
        name: String,
    },
    /// Show an artist profile with familiarity and hotttnesss
    Profile {
        /// Echo Nest artist ID (ARxxxx...) or artist name
        id_or_name: String,
    },
    /// List artists similar to the given artist
    Similar {
        /// Seed artist name
        name: String,
    },
    /// List the current top hottt artists
    TopHottt,
}

/// Echo Nest artist IDs look like "ARH6W4X1187B99274F".
fn artist_selector(id_or_name: &str) -> Options {
    if id_or_name.starts_with("AR") && id_or_name.len() == 18 {
        Options::new().set("id", id_or_name)
    } else {
        Options::new().set("name", id_or_name)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let api = EchonestApi::new(cli.api_key.as_str())?;

    match &cli.command {
        Commands::Search { name } => {
            let artists = api
                .artist_search(
                    &Options::new()
                        .set("name", name.as_str())
                        .set("results", cli.results),
                )
                .await?;
            for (i, artist) in artists.iter().enumerate() {
                println!("{}. {} (ID: {})", i + 1, artist.name, artist.id);
            }
        }
        Commands::Profile { id_or_name } => {
            let options = artist_selector(id_or_name)
                .set("bucket", "familiarity")
                .set("bucket", "hotttnesss");
            let artist = api.artist_profile(&options).await?;
            println!("{} (ID: {})", artist.name, artist.id);
            if let Some(familiarity) = artist.familiarity {
                println!("  familiarity: {:.3}", familiarity);
            }
            if let Some(hotttnesss) = artist.hotttnesss {
                println!("  hotttnesss:  {:.3}", hotttnesss);
            }
        }
        Commands::Similar { name } => {
            let artists = api
                .artist_similar(
                    &Options::new()
                        .set("name", name.as_str())
                        .set("results", cli.results),
                )
                .await?;
            for (i, artist) in artists.iter().enumerate() {
                println!("{}. {} (ID: {})", i + 1, artist.name, artist.id);
            }
        }
        Commands::TopHottt => {
            let artists = api
                .artist_top_hottt(&Options::new().set("results", cli.results))
                .await?;
            for (i, artist) in artists.iter().enumerate() {
                println!("{}. {} (ID: {})", i + 1, artist.name, artist.id);
            }
        }
    }

    Ok(())
}
