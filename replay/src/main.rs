use anyhow::{anyhow, Context, Result};
use clap::{App, Arg};
use collision_core::session::DrawingConfig;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

mod report;
mod script;

use script::Script;

fn load_config(path: Option<&str>) -> Result<DrawingConfig> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path))?;
            serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path))
        }
        None => Ok(DrawingConfig::default()),
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays machine readable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = App::new("collision-replay")
        .version(collision_core::version())
        .about("Replays a recorded collision sketch and prints what was derived from it")
        .arg(
            Arg::with_name("SCRIPT")
                .help("JSON script of recorded wizard events")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("JSON drawing configuration")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .help("Print the derived record as JSON instead of a summary"),
        )
        .get_matches();

    let config = load_config(matches.value_of("config"))?;
    info!(?config, "drawing configuration");

    let script_path = matches
        .value_of("SCRIPT")
        .ok_or_else(|| anyhow!("No script given"))?;
    let script = Script::load(Path::new(script_path))?;
    let replay = script.replay(&config);

    if !replay.rejected.is_empty() {
        warn!(count = replay.rejected.len(), "some events were rejected");
    }

    if matches.is_present("json") {
        let json = serde_json::to_string_pretty(replay.session.derived())
            .context("Failed to serialize derived data")?;
        println!("{}", json);
    } else {
        print!("{}", report::Summary(&replay.session));
    }
    Ok(())
}
