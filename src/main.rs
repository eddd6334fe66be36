mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use matinee_core::{config::Config, media};
use matinee_server::library::MediaLibrary;
use std::path::{Path, PathBuf};

async fn serve(
    host: Option<String>,
    port: Option<u16>,
    media_dir: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    // Load config
    let mut config = Config::load_or_default(config_path);

    // CLI flags override the config file
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(media_dir) = media_dir {
        config.library.media_dir = media_dir;
    }
    if let Some(static_dir) = static_dir {
        config.server.static_dir = Some(static_dir);
    }

    tracing::info!("Starting matinee server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    matinee_server::start(config).await?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "matinee=trace,matinee_core=trace,matinee_server=trace,tower_http=debug".to_string()
        } else {
            "matinee=info,matinee_core=info,matinee_server=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            media_dir,
            static_dir,
        } => {
            // Create tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(serve(
                host,
                port,
                media_dir,
                static_dir,
                cli.config.as_deref(),
            ))
        }
        Commands::List { media_dir, json } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(list_media(media_dir, json, cli.config.as_deref()))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("matinee {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn list_media(
    media_dir: Option<PathBuf>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let root = media_dir.unwrap_or(config.library.media_dir);

    let library = MediaLibrary::new(root.clone());
    let mut entries = library.scan().await?;
    entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No media files found in {}", root.display());
        return Ok(());
    }

    println!("{} media file(s) in {}", entries.len(), root.display());
    for entry in &entries {
        let marker = if entry.thumbnail.is_some() {
            " [thumbnail]"
        } else {
            ""
        };
        println!(
            "  {} ({}, {}){}",
            entry.title,
            entry.file_name,
            media::kind(&entry.file_name),
            marker
        );
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {}", p.display());
            let contents = std::fs::read_to_string(p)?;
            Config::from_json(&contents)?
        }
        None => {
            println!("No config file specified, using defaults");
            Config::default()
        }
    };

    println!("  Server: {}:{}", config.server.host, config.server.port);
    match &config.server.static_dir {
        Some(dir) => println!("  Static dir: {}", dir.display()),
        None => println!("  Static dir: (disabled)"),
    }
    println!("  Media dir: {}", config.library.media_dir.display());

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("✓ Configuration is valid");
    } else {
        println!("Configuration loaded with {} warning(s):", warnings.len());
        for warning in &warnings {
            println!("  ! {warning}");
        }
    }

    Ok(())
}
