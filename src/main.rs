use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use jobmap::listing::{search, seed, Category};
use jobmap::{assist, cluster_with, AssistClient, PinKeying, ZoomLevel};

const DEFAULT_ENDPOINT: &str = "http://localhost:18115";

#[derive(Parser)]
#[command(name = "jobmap", about = "Neighborhood job marketplace, terminal edition")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the map pin layout at a zoom level
    Map {
        /// Zoom step, 1 (widest) to 3 (closest)
        #[arg(long, default_value_t = 1)]
        zoom: u8,
        /// Filter listings by title or organization
        #[arg(long)]
        query: Option<String>,
        /// Key pin positions by listing id instead of display order
        #[arg(long)]
        stable: bool,
    },
    /// List the sample postings
    List {
        #[arg(long)]
        query: Option<String>,
    },
    /// Generate a posting description with the assist service
    Describe {
        #[arg(long)]
        title: String,
        /// market, pharmacy, restaurant, shop, or bakery
        #[arg(long, default_value = "shop")]
        category: String,
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
    /// Rank the sample postings against a candidate description
    Recommend {
        #[arg(long)]
        experience: String,
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Map {
            zoom,
            query,
            stable,
        } => run_map(zoom, query.as_deref().unwrap_or(""), stable),
        Command::List { query } => run_list(query.as_deref().unwrap_or("")),
        Command::Describe {
            title,
            category,
            endpoint,
        } => run_describe(&title, &category, &endpoint),
        Command::Recommend {
            experience,
            endpoint,
        } => run_recommend(&experience, &endpoint),
    }
}

fn run_map(zoom: u8, query: &str, stable: bool) -> Result<()> {
    let listings = seed::sample_listings();
    let visible = search(&listings, query);
    let keying = if stable {
        PinKeying::StableId
    } else {
        PinKeying::DisplayOrder
    };
    let layout = cluster_with(&visible, ZoomLevel::new(zoom), keying);

    println!(
        "zoom {} — {} clusters, {} pins",
        ZoomLevel::new(zoom).level(),
        layout.clusters.len(),
        layout.singles.len()
    );

    for cluster in &layout.clusters {
        let titles: Vec<&str> = cluster.members.iter().map(|l| l.title.as_str()).collect();
        println!(
            "  ({:>4.1}%, {:>4.1}%)  [{}] {} listings: {}",
            cluster.position.top,
            cluster.position.left,
            cluster.key,
            cluster.count,
            titles.join(", ")
        );
    }

    for pin in &layout.singles {
        println!(
            "  ({:>4.1}%, {:>4.1}%)  {} {} — {} ({})",
            pin.position.top,
            pin.position.left,
            pin.listing.category.glyph().symbol(),
            pin.listing.title,
            pin.listing.organization,
            pin.listing.salary
        );
    }

    Ok(())
}

fn run_list(query: &str) -> Result<()> {
    let listings = seed::sample_listings();
    let visible = search(&listings, query);

    println!("{} listings", visible.len());
    for listing in visible {
        println!(
            "  #{} {} — {} | {} | {:.1} km | {:?} shift",
            listing.id,
            listing.title,
            listing.organization,
            listing.salary,
            listing.distance_km,
            listing.shift
        );
        println!("     {}", listing.description);
    }

    Ok(())
}

fn run_describe(title: &str, category: &str, endpoint: &str) -> Result<()> {
    let Some(category) = Category::parse(category) else {
        bail!("unknown category: {category}");
    };

    let client = AssistClient::new(endpoint);
    let description = assist::describe_or_fallback(&client, title, category);
    println!("{description}");
    Ok(())
}

fn run_recommend(experience: &str, endpoint: &str) -> Result<()> {
    let listings = seed::sample_listings();
    let client = AssistClient::new(endpoint);
    let ids = assist::recommendations_or_empty(&client, experience, &listings);

    if ids.is_empty() {
        println!("No recommendations available.");
        return Ok(());
    }

    for id in ids {
        match listings.iter().find(|l| l.id == id) {
            Some(listing) => println!("  #{} {} — {}", id, listing.title, listing.organization),
            None => println!("  #{id} (unknown listing)"),
        }
    }

    Ok(())
}
