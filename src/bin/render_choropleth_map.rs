use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use dataviz_rs::charts::choropleth::{ChoroplethConfig, build_choropleth_map};
use dataviz_rs::data::education::CountyEducation;
use dataviz_rs::data::loader::{COUNTY_DATA_URL, DatasetLoader, EDUCATION_DATA_URL};
use dataviz_rs::data::topology::Topology;
use dataviz_rs::render::{Renderer, SvgRenderer};

fn main() -> ExitCode {
    let _ = dataviz_rs::telemetry::init_default_tracing();
    match run() {
        Ok(output) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("choropleth render failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let loader = DatasetLoader::new()?;
    // Both resources must resolve before any rendering happens.
    let (education, topology): (Vec<CountyEducation>, Topology) =
        loader.fetch_join(EDUCATION_DATA_URL, COUNTY_DATA_URL)?;

    let scene = build_choropleth_map(&education, &topology, &ChoroplethConfig::default())?;
    let mut renderer = SvgRenderer::new();
    renderer.render(&scene.frame)?;

    let output = PathBuf::from("choropleth_map.svg");
    fs::write(&output, renderer.svg())?;
    println!("{} counties rendered", scene.mark_count());
    Ok(output)
}
