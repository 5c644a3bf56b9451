use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use maplet_request::{ApiConfig, RequestManager, RequestParameters, ResourceType};

/// Inspect how maplet rewrites resource URLs for a deployment
#[derive(Parser)]
#[command(name = "maplet-url")]
#[command(about = "Normalize mapabc: style, sprite and glyph URLs", long_about = None)]
struct Cli {
    /// JSON deployment configuration; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API origin, e.g. https://api.mapabc.com
    #[arg(long)]
    api_url: Option<String>,

    /// Global access token
    #[arg(long)]
    token: Option<String>,

    /// Per-map token taking precedence over `--access-token`
    #[arg(long)]
    custom_token: Option<String>,

    /// Do not require an access token
    #[arg(long)]
    no_token_required: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a style URL
    Style {
        url: String,
        #[arg(long)]
        access_token: Option<String>,
    },
    /// Normalize a sprite URL
    Sprite {
        url: String,
        /// Pixel-ratio suffix such as @2x
        #[arg(long, default_value = "")]
        format: String,
        #[arg(long, default_value = ".json")]
        extension: String,
        #[arg(long)]
        access_token: Option<String>,
    },
    /// Normalize a glyphs URL
    Glyphs {
        url: String,
        #[arg(long)]
        access_token: Option<String>,
    },
    /// Show the request parameters handed to the fetch layer
    Transform {
        url: String,
        #[arg(long, default_value = "unknown", value_parser = parse_resource_type)]
        resource_type: ResourceType,
        /// Extra header as NAME=VALUE; may be repeated
        #[arg(long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },
}

fn parse_resource_type(value: &str) -> std::result::Result<ResourceType, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown resource type `{value}`"))
}

fn parse_header(value: &str) -> std::result::Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(name, v)| (name.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{value}`"))
}

fn load_config(cli: &Cli) -> Result<ApiConfig> {
    let mut config = match &cli.config {
        Some(path) => ApiConfig::from_json_file(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => ApiConfig::default(),
    };

    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(token) = &cli.token {
        config.access_token = Some(token.clone());
    }
    if cli.no_token_required {
        config.require_access_token = false;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    log::debug!("using API origin {}", config.api_url);

    let mut manager = RequestManager::new(Arc::new(config));
    if let Some(token) = &cli.custom_token {
        manager = manager.with_custom_access_token(token.clone());
    }

    match cli.command {
        Commands::Style { url, access_token } => {
            let normalized = manager
                .normalize_style_url(&url, access_token.as_deref())
                .with_context(|| format!("cannot normalize style {url}"))?;
            println!("{normalized}");
        }
        Commands::Sprite {
            url,
            format,
            extension,
            access_token,
        } => {
            let normalized = manager
                .normalize_sprite_url(&url, &format, &extension, access_token.as_deref())
                .with_context(|| format!("cannot normalize sprite {url}"))?;
            println!("{normalized}");
        }
        Commands::Glyphs { url, access_token } => {
            let normalized = manager
                .normalize_glyphs_url(&url, access_token.as_deref())
                .with_context(|| format!("cannot normalize glyphs {url}"))?;
            println!("{normalized}");
        }
        Commands::Transform {
            url,
            resource_type,
            headers,
        } => {
            if !headers.is_empty() {
                manager.set_transform_request(move |url: &str, _: ResourceType| {
                    let params = headers
                        .iter()
                        .fold(RequestParameters::new(url), |params, (name, value)| {
                            params.with_header(name.clone(), value.clone())
                        });
                    Some(params)
                });
            }
            let params = manager.transform_request(&url, resource_type);
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
    }

    Ok(())
}
