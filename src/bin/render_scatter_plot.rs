use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use dataviz_rs::charts::scatter::{ScatterPlotConfig, build_scatter_plot};
use dataviz_rs::data::cyclist::CyclistRide;
use dataviz_rs::data::loader::{CYCLIST_DATA_URL, DatasetLoader};
use dataviz_rs::render::{Renderer, SvgRenderer};

fn main() -> ExitCode {
    let _ = dataviz_rs::telemetry::init_default_tracing();
    match run() {
        Ok(output) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("scatter plot render failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let loader = DatasetLoader::new()?;
    let rides: Vec<CyclistRide> = loader.fetch_json(CYCLIST_DATA_URL)?;

    let scene = build_scatter_plot(&rides, &ScatterPlotConfig::default())?;
    let mut renderer = SvgRenderer::new();
    renderer.render(&scene.frame)?;

    let output = PathBuf::from("scatter_plot.svg");
    fs::write(&output, renderer.svg())?;
    println!("{} dots rendered", scene.mark_count());
    Ok(output)
}
