use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use dataviz_rs::charts::heat_map::{HeatMapConfig, build_heat_map};
use dataviz_rs::data::loader::{DatasetLoader, TEMPERATURE_DATA_URL};
use dataviz_rs::data::temperature::GlobalTemperature;
use dataviz_rs::render::{Renderer, SvgRenderer};

fn main() -> ExitCode {
    let _ = dataviz_rs::telemetry::init_default_tracing();
    match run() {
        Ok(output) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("heat map render failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let loader = DatasetLoader::new()?;
    let dataset: GlobalTemperature = loader.fetch_json(TEMPERATURE_DATA_URL)?;

    let scene = build_heat_map(&dataset, &HeatMapConfig::default())?;
    let mut renderer = SvgRenderer::new();
    renderer.render(&scene.frame)?;

    let output = PathBuf::from("heat_map.svg");
    fs::write(&output, renderer.svg())?;
    println!("{} cells rendered", scene.mark_count());
    Ok(output)
}
