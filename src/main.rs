mod output;
mod postfix;
mod version;

use std::env;
use std::path::Path;
use std::process;

use anyhow::Result;
use chrono::Datelike;
use log::{error, info, warn};

use output::{write_outputs, VersionFiles};
use postfix::read_postfix;
use version::{date_to_version_string, version_code};

/// compute the version code for `date` and write both output files
pub fn generate<D: Datelike>(files: &VersionFiles, date: Option<&D>) -> Result<String> {
    let code = version_code(&date_to_version_string(date));
    let postfix = read_postfix(&files.postfix);
    write_outputs(files, &code, &postfix)?;
    Ok(code)
}

fn run(dir: &Path) -> Result<()> {
    let files = VersionFiles::in_dir(dir);
    let now = chrono::Local::now();
    let code = generate(&files, Some(&now))?;
    info!("version {} written to {:?}", code, dir);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<_> = env::args_os().skip(1).collect();
    if !args.is_empty() {
        warn!("ignoring arguments {:?}", args);
    }

    if let Err(e) = run(Path::new(".")) {
        error!("{:#}", e);
        process::exit(1);
    }
}
