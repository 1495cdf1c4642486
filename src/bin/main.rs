extern crate sphere_tracer as root;

use root::parsing::config::{Config, TOMLConfig};
use root::parsing::get_settings;
use root::renderer::{output_film, render};

use anyhow::Context;
use structopt::StructOpt;
use tracing::{error, info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// renders the built in three sphere scene when omitted
    #[structopt(long)]
    pub config_file: Option<String>,
    #[structopt(short = "o", long)]
    pub output: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long)]
    pub no_progress: bool,
    #[structopt(short = "l", long, default_value = "warn")]
    pub print_log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn load_config(opts: &Opt) -> anyhow::Result<Config> {
    let mut data = match &opts.config_file {
        Some(path) => {
            get_settings(path).with_context(|| format!("couldn't read config file {}", path))?
        }
        None => TOMLConfig::default(),
    };
    // override output file based on provided command line argument
    if let Some(output) = &opts.output {
        data.output.filename = output.clone();
    }
    Config::try_from(data).context("invalid scene configuration")
}

fn dry_run_notice(config: &Config) -> String {
    format!(
        "Config is valid, {}x{} with {} primitives",
        config.resolution.width,
        config.resolution.height,
        config.scene.len()
    )
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let config = load_config(&opts)?;
    if opts.dry_run {
        info!("dry run, skipping render");
        println!("{}", dry_run_notice(&config));
        return Ok(());
    }

    let (film, _profile) = render(&config, !opts.no_progress).context("render failed")?;
    let path = output_film(&config, &film)
        .with_context(|| format!("failed to write {}", config.output.filename))?;
    println!("Rendered to {}", path.to_string_lossy());
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.print_log_level, Level::WARN))
        .init();

    if let Err(e) = run(opts) {
        error!("{:?}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
