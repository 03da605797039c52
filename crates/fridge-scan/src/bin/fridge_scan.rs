use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fridge_scan::core::init_with_level;
use fridge_scan::scan::scan_image_bytes;
use fridge_scan::IngredientDetector;
use log::LevelFilter;

/// Guess fridge ingredients from a photo and suggest recipes.
#[derive(Parser, Debug)]
#[command(name = "fridge-scan", version, about)]
struct Args {
    /// Path to the fridge photo (any format the `image` crate decodes).
    image: PathBuf,

    /// Write the full JSON report here.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print each recipe's steps, not just its title.
    #[arg(long)]
    full_recipes: bool,

    /// Log more (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = init_with_level(level) {
        eprintln!("failed to install logger: {err}");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = std::fs::read(&args.image)?;
    let detector = IngredientDetector::new();
    let report = scan_image_bytes(&bytes, &detector)?;

    println!("ingredients ({}):", report.ingredients.len());
    for candidate in &report.ingredients {
        println!("  {:>3}%  {}", candidate.confidence, candidate.name);
    }

    println!("recipes ({}):", report.recipes.len());
    for recipe in &report.recipes {
        println!(
            "  {} ({} min, {:?}, serves {})",
            recipe.name, recipe.cooking_time_minutes, recipe.difficulty, recipe.servings
        );
        if args.full_recipes {
            for (i, step) in recipe.instructions.iter().enumerate() {
                println!("    {}. {step}", i + 1);
            }
        }
    }

    if let Some(path) = &args.output {
        report.write_json(path)?;
        println!("report written to {}", path.display());
    }

    Ok(())
}
