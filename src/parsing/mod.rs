pub mod config;

use crate::errors::RenderError;
use crate::math::Float;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{error, info};

use self::config::TOMLConfig;

pub type Vec3Data = [Float; 3];

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> Result<TOMLConfig, RenderError> {
    let filepath = filepath.as_ref();
    info!("loading config file, {}", filepath.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .inspect_err(|e| error!("{}", e))?;
    info!("done: {} bytes", read_count);

    let settings: TOMLConfig = toml::from_str(&input).inspect_err(|e| {
        error!("encountered error when parsing config file: {}", e);
    })?;
    Ok(settings)
}
