//! trapgrid command line: generate grids, search them, or do both at once.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use trapgrid::api::{self, GenerateRequest, SearchRequest};
use trapgrid::{Config, Session, render};

#[derive(Parser)]
#[command(name = "trapgrid")]
#[command(about = "Generate trap grids and route across them with pruned A*")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a grid and print it as JSON
    Generate(GenArgs),
    /// Read a grid as JSON and print the search result as JSON
    Search {
        /// Input file; stdin when absent
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Generate, search and draw the result
    Run(GenArgs),
}

#[derive(Args)]
struct GenArgs {
    /// Grid side length
    #[arg(long)]
    size: Option<i64>,

    /// Number of traps
    #[arg(long)]
    traps: Option<i64>,

    /// Random seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,
}

impl GenArgs {
    /// Apply flags over the configured values.
    fn request(&self, config: &mut Config) -> GenerateRequest {
        if self.seed.is_some() {
            config.generation.seed = self.seed;
        }
        GenerateRequest {
            grid_size: self.size.unwrap_or(i64::from(config.generation.grid_size)),
            trap_count: self.traps.unwrap_or(config.generation.trap_count as i64),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Generate(args) => {
            let req = args.request(&mut config);
            let mut session = Session::new(&config.generation);
            let resp = api::generate(&mut session, &req)?;
            serde_json::to_writer(&mut out, &resp)?;
            writeln!(out)?;
        }
        Command::Search { input } => {
            let text = match input {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut s = String::new();
                    io::stdin().read_to_string(&mut s)?;
                    s
                }
            };
            let req: SearchRequest = serde_json::from_str(&text)?;
            let resp = api::search(req)?;
            serde_json::to_writer(&mut out, &resp)?;
            writeln!(out)?;
        }
        Command::Run(args) => {
            let req = args.request(&mut config);
            let mut session = Session::new(&config.generation);
            api::generate(&mut session, &req)?;
            let found = session.search()?;
            if let Some(layout) = session.layout() {
                write!(out, "{}", render(layout, &found.path))?;
            }
            if !found.found() {
                log::warn!("no trap-free route to the goal");
            }
            let stats = found.stats;
            writeln!(
                out,
                "explored {}, pruned {}, path length {}",
                stats.explored, stats.pruned, stats.path_length
            )?;
        }
    }
    Ok(())
}
