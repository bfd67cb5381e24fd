use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{Context, Result};
use clap::Parser;
use config::{builder::DefaultState, Config, ConfigBuilder};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default)]
    pub log: utils::logger::Config,
    pub http_server: HttpServer,
    #[serde(default)]
    pub registry: Registry,
}

#[derive(Deserialize, Debug)]
pub struct HttpServer {
    pub bind: String,
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

#[derive(Deserialize, Debug, Default)]
pub struct Registry {
    /// JSON file to seed activities from; the built-in list is used otherwise.
    pub seed_file: Option<PathBuf>,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Mergington High School activity signup server
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed activities from this JSON file
    #[arg(short, long)]
    pub seed_file: Option<PathBuf>,
}

pub fn load_settings() -> Result<&'static Settings> {
    let args = Args::parse();
    let settings = build_settings(&args)?;
    Ok(SETTINGS.get_or_init(|| settings))
}

/// Layers, lowest first: `configs/default.toml`, the `--config` file,
/// `MERGINGTON__*` environment variables, then the remaining command line flags.
pub fn build_settings(args: &Args) -> Result<Settings> {
    let mut builder = base_builder()?;

    if let Some(path) = &args.config {
        println!("loading settings. path = {:?}", path);
        builder = builder.add_source(config::File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("MERGINGTON")
            .separator("__")
            .try_parsing(true),
    );

    if let Some(seed_file) = &args.seed_file {
        builder = builder.set_override("registry.seed_file", seed_file.display().to_string())?;
    }

    let settings: Settings = builder
        .build()
        .context("cannot load config")?
        .try_deserialize()
        .context("wrong config format")?;

    Ok(settings)
}

fn base_builder() -> Result<ConfigBuilder<DefaultState>> {
    let default = config::File::from(Path::new("./configs/default.toml")).required(false);
    let builder = Config::builder()
        .set_default("http_server.bind", "0.0.0.0")?
        .set_default("http_server.port", 8000)?
        .add_source(default);
    Ok(builder)
}
