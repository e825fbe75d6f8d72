use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use recipe_catalog::{
    build_graph, load_catalog, CATEGORY_TAGS, DIFFICULTY_TAGS, SERVES_TAGS, TIME_TAGS,
};
use recipe_graph::{recommend, ItemCard};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Tag-filtered recipe recommendations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend recipes matching the selected filter tags
    Recommend(RecommendArgs),

    /// List the filter-tag vocabulary, grouped by dimension
    Tags,
}

#[derive(Args)]
struct RecommendArgs {
    /// Path to the recipe catalog (JSON array of records)
    #[arg(long)]
    catalog: PathBuf,

    /// Category tag (e.g. "Vegan Recipes")
    #[arg(long)]
    category: Option<String>,

    /// Difficulty tag ("Easy" or "Challenging")
    #[arg(long)]
    difficulty: Option<String>,

    /// Serving-size tag (e.g. "3 ~ 4")
    #[arg(long)]
    serves: Option<String>,

    /// Time-bucket tag (e.g. "Quick (0 ~ 20 mins)")
    #[arg(long)]
    time: Option<String>,

    /// Maximum number of results
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Recommend(args) => run_recommend(args),
        Commands::Tags => {
            print_tags();
            Ok(())
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_filter = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run_recommend(args: RecommendArgs) -> Result<()> {
    let records = load_catalog(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
    let graph = build_graph(&records).context("Failed to build recipe graph")?;

    let selected: Vec<String> = [args.category, args.difficulty, args.serves, args.time]
        .into_iter()
        .flatten()
        .collect();
    log::debug!("Selected tags: {:?}", selected);

    let ranked = recommend(&graph, &selected, args.limit);

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranked)?),
        OutputFormat::Text => print_text(&ranked),
    }

    Ok(())
}

fn print_text(ranked: &[ItemCard]) {
    if ranked.is_empty() {
        println!("No recipes match the selected tags.");
        return;
    }

    for (position, card) in ranked.iter().enumerate() {
        println!("{}. {} ({}/5)", position + 1, card.name, card.rating);
        println!("   {}", card.url);
        println!("   {}", card.description);
    }
}

fn print_tags() {
    let dimensions: [(&str, &[&str]); 4] = [
        ("Category", &CATEGORY_TAGS),
        ("Difficulty", &DIFFICULTY_TAGS),
        ("Serves", &SERVES_TAGS),
        ("Time", &TIME_TAGS),
    ];

    for (dimension, tags) in dimensions {
        println!("{dimension}:");
        for tag in tags {
            println!("  {tag}");
        }
    }
}
