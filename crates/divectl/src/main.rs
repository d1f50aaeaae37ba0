use anyhow::Context;
use clap::{Parser, Subcommand};
use divemark::{ArenaVariant, MARK_COUNT, Session, TokenFormat};
use rand::SeedableRng;
use rand::rngs::StdRng;

mod config;
mod render;

#[derive(Parser, Debug)]
#[command(name = "divectl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Arena layout override: 8 or 12 slots
    #[arg(short = 'n', long, global = true)]
    variant: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Draw a configuration as a text-mode stage preview
    Show {
        /// Share token in either format; omitted shows the fresh layout
        token: Option<String>,
    },
    /// Decode a share token and list its fields
    Decode { token: String },
    /// Re-encode a token, converting between formats
    Encode {
        token: String,
        /// Target format: compact or query
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Pick five dragons at random and print the share tokens
    Random {
        /// Seed for a reproducible pick
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Write the default config file and print its path
    Init,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = config::load_or_default();

    let variant = match &cli.variant {
        Some(raw) => raw
            .parse::<ArenaVariant>()
            .map_err(|_| anyhow::anyhow!("unknown arena variant '{raw}', expected 8 or 12"))?,
        None => config.variant,
    };

    let mut session = Session::new(variant);
    session.set_dive_width(config.dive_width);

    match cli.command {
        Commands::Show { token } => {
            if let Some(token) = &token {
                session.load_token(token);
            }
            show(&session);
        }
        Commands::Decode { token } => {
            session.load_token(&token);
            describe(&session, &token);
        }
        Commands::Encode { token, format } => {
            session.load_token(&token);
            let format = match &format {
                Some(raw) => raw.parse::<TokenFormat>().map_err(|_| {
                    anyhow::anyhow!("unknown token format '{raw}', expected compact or query")
                })?,
                None => config.format,
            };
            println!("{}", session.export_token(format));
        }
        Commands::Random { seed } => {
            match seed {
                Some(seed) => session.random_dragons(&mut StdRng::seed_from_u64(seed)),
                None => session.random_dragons(&mut rand::rng()),
            }
            println!("{}", session.export_token(TokenFormat::Compact));
            println!("{}", session.export_token(TokenFormat::Query));
        }
        Commands::Init => {
            let path = config::write_default_config().context("Failed to write default config")?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn show(session: &Session) {
    print!("{}", render::draw_stage(session));

    let poses = session.dive_poses();
    if poses.is_empty() {
        println!(
            "dives: need exactly five dragons ({} picked)",
            session.selection().count()
        );
        return;
    }

    let rect = session.dive_rect();
    println!("dives ({} x {}):", rect.width, rect.height);
    for (index, pose) in poses.iter().enumerate() {
        println!(
            "  {index}: anchor ({:.0}, {:.0}), rotation {:+.1}°",
            pose.anchor.x, pose.anchor.y, pose.rotation_deg
        );
    }
}

fn describe(session: &Session, token: &str) {
    let format = TokenFormat::detect(token).to_string().to_lowercase();
    println!("format: {format}");
    println!("arena: {} slots", session.spec().slot_count());

    let indices = session.selection().indices();
    let list = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("dragons ({}): {list}", indices.len());

    for index in 0..MARK_COUNT {
        let mark = session.mark_position(index);
        println!("mark {}: ({}, {})", index + 1, mark.x, mark.y);
    }
}
