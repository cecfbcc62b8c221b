use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use dataviz_rs::charts::tree_map::{TreeMapConfig, build_tree_map};
use dataviz_rs::data::games::SalesNode;
use dataviz_rs::data::loader::{DatasetLoader, GAME_SALES_URL};
use dataviz_rs::render::{Renderer, SvgRenderer};

fn main() -> ExitCode {
    let _ = dataviz_rs::telemetry::init_default_tracing();
    match run() {
        Ok(output) => {
            println!("wrote {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("tree map render failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let loader = DatasetLoader::new()?;
    let root: SalesNode = loader.fetch_json(GAME_SALES_URL)?;

    let scene = build_tree_map(&root, &TreeMapConfig::default())?;
    let mut renderer = SvgRenderer::new();
    renderer.render(&scene.frame)?;

    let output = PathBuf::from("tree_map.svg");
    fs::write(&output, renderer.svg())?;
    println!("{} tiles rendered", scene.mark_count());
    Ok(output)
}
