use std::{
    env,
    path::{Path, PathBuf},
    time::Instant,
};

use fridge_scan::core::init_with_level;
use fridge_scan::scan::{resize_for_analysis, rgb_view};
use fridge_scan::{IngredientDetector, ScanReport};
use image::ImageReader;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(log::LevelFilter::Info)?;

    let (image_path, output_path) = parse_paths();
    let t_total = Instant::now();

    let (img, load_ms) = timed_result(|| load_image(&image_path))?;
    info!("loaded {} ({}x{})", image_path.display(), img.width(), img.height());

    let (resized, resize_ms) = timed_value(|| resize_for_analysis(&img));
    let (tally, analyze_ms) = timed_value(|| fridge_scan::color::analyze(&rgb_view(&resized)));

    let detector = IngredientDetector::new();
    info!("detecting with {} bucket rules", detector.catalog().len());
    let (ingredients, detect_ms) = timed_value(|| detector.detect(&tally));
    let (recipes, synthesize_ms) = timed_result(|| fridge_scan::recipes::synthesize(&ingredients))?;

    for candidate in &ingredients {
        info!("{:>3}% {}", candidate.confidence, candidate.name);
    }
    for recipe in &recipes {
        info!("recipe: {}", recipe.name);
    }

    let report = ScanReport {
        color_tally: Some(tally),
        ingredients,
        recipes,
    };
    report.write_json(&output_path)?;
    println!("wrote report JSON to {}", output_path.display());

    info!(
        "timings ms: load {load_ms}, resize {resize_ms}, analyze {analyze_ms}, \
         detect {detect_ms}, synthesize {synthesize_ms}, total {}",
        t_total.elapsed().as_millis()
    );

    Ok(())
}

fn parse_paths() -> (PathBuf, PathBuf) {
    let mut args = env::args().skip(1);
    let image = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("usage: scan_image <photo> [report.json]");
        std::process::exit(2);
    });
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fridge_scan_report.json"));
    (image, output)
}

fn load_image(path: &Path) -> Result<image::RgbImage, Box<dyn std::error::Error>> {
    Ok(ImageReader::open(path)?.decode()?.to_rgb8())
}

fn timed_result<T, E, F: FnOnce() -> Result<T, E>>(f: F) -> Result<(T, u64), E> {
    let start = Instant::now();
    let value = f()?;
    let elapsed = start.elapsed().as_millis() as u64;
    Ok((value, elapsed))
}

fn timed_value<T, F: FnOnce() -> T>(f: F) -> (T, u64) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed().as_millis() as u64;
    (value, elapsed)
}
