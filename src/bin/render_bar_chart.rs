use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use dataviz_rs::charts::bar::{BarChartConfig, build_bar_chart};
use dataviz_rs::data::gdp::GdpDataset;
use dataviz_rs::data::loader::{DatasetLoader, GDP_DATA_URL};
use dataviz_rs::render::{Renderer, SvgRenderer};

fn main() -> ExitCode {
    let _ = dataviz_rs::telemetry::init_default_tracing();
    match run() {
        Ok(output) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("bar chart render failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let loader = DatasetLoader::new()?;
    let dataset: GdpDataset = loader.fetch_json(GDP_DATA_URL)?;

    let scene = build_bar_chart(&dataset, &BarChartConfig::default())?;
    let mut renderer = SvgRenderer::new();
    renderer.render(&scene.frame)?;

    let output = PathBuf::from("bar_chart.svg");
    fs::write(&output, renderer.svg())?;
    println!("{} bars rendered", scene.mark_count());
    Ok(output)
}
