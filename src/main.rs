//! LookAtMe CLI - maintenance front-end for the lock-screen data
//!
//! Usage: lookatme <COMMAND>
//!
//! Commands:
//!   import    Copy a file into private storage and record it
//!   list      List packaged and imported assets of a kind
//!   delete    Delete an imported asset
//!   select    Make an asset the active font, image or sound
//!   show      Print the appearance plan the lock screen would use
//!   settings  Print the effective settings
//!   verify    Check a package name and signing certificate

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use lookatme::domain::policies::{signature_digest, IntegrityPolicy, IntegrityVerdict};
use lookatme::infrastructure::{lookatme_data_dir, DataLayout};
use lookatme::{
    AppearancePlan, Asset, AssetIdentifier, AssetKind, AssetLibrary, BuiltinAssets,
    LocalFileSource, LookAtMeError, Settings, TomlAssetStore,
};

/// LookAtMe - prank lock screen data tool
#[derive(Parser, Debug)]
#[command(name = "lookatme")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for scripting
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (defaults to $LOOKATME_HOME or the platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Copy a file into private storage and record it
    Import {
        #[arg(value_parser = parse_kind)]
        kind: AssetKind,
        file: PathBuf,
    },

    /// List packaged and imported assets of a kind
    List {
        #[arg(value_parser = parse_kind)]
        kind: AssetKind,
    },

    /// Delete an imported asset
    Delete {
        #[arg(value_parser = parse_kind)]
        kind: AssetKind,
        path: PathBuf,
    },

    /// Make an asset the active font, image or sound
    Select {
        #[arg(value_parser = parse_kind)]
        kind: AssetKind,

        /// `res:<id>` or `file:<path>`
        identifier: AssetIdentifier,
    },

    /// Print the appearance plan the lock screen would use
    Show,

    /// Print the effective settings
    Settings,

    /// Check a package name and signing certificate
    Verify {
        /// Package name of the running build
        package: String,

        /// DER-encoded signing certificate
        #[arg(long)]
        certificate: Option<PathBuf>,

        /// Expected base64 SHA-256 digest of the certificate
        #[arg(long)]
        expected_digest: Option<String>,
    },
}

fn parse_kind(s: &str) -> Result<AssetKind, String> {
    AssetKind::parse(s).ok_or_else(|| format!("unknown asset kind '{}' (font, image, sound)", s))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = match cli.data_dir.clone() {
        Some(dir) => dir,
        None => lookatme_data_dir().context("could not determine the data directory")?,
    };
    let layout = DataLayout::new(root);

    match cli.command {
        Commands::Import { kind, file } => cmd_import(&layout, kind, &file, cli.json),
        Commands::List { kind } => cmd_list(&layout, kind, cli.json),
        Commands::Delete { kind, path } => cmd_delete(&layout, kind, &path, cli.json),
        Commands::Select { kind, identifier } => cmd_select(&layout, kind, &identifier, cli.json),
        Commands::Show => cmd_show(&layout, cli.json),
        Commands::Settings => cmd_settings(&layout, cli.json),
        Commands::Verify {
            package,
            certificate,
            expected_digest,
        } => cmd_verify(&package, certificate.as_deref(), expected_digest, cli.json),
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn library(layout: &DataLayout) -> AssetLibrary<BuiltinAssets, TomlAssetStore> {
    AssetLibrary::new(
        BuiltinAssets::new(),
        TomlAssetStore::new(layout.root()),
        layout.settings_file(),
    )
}

fn asset_json(asset: &Asset) -> serde_json::Value {
    serde_json::json!({
        "name": asset.name(),
        "identifier": asset.identifier().to_string(),
        "packaged": asset.is_packaged(),
    })
}

fn cmd_import(layout: &DataLayout, kind: AssetKind, file: &Path, json: bool) -> Result<()> {
    let mut source = LocalFileSource::new(file);
    let asset = library(layout)
        .import(&mut source, kind)
        .with_context(|| format!("failed to import {}", file.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "import",
            "kind": kind.as_str(),
            "asset": asset_json(&asset),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Imported {} '{}'", kind, asset.name());
        println!("  {}", asset.identifier());
    }
    Ok(())
}

fn cmd_list(layout: &DataLayout, kind: AssetKind, json: bool) -> Result<()> {
    let library = library(layout);
    let assets = library.list(kind)?;
    // A stale selection only warns; unreadable settings fail
    let selected = match library.selected(kind) {
        Ok(selected) => selected,
        Err(LookAtMeError::Catalog(e)) => {
            log::warn!("ignoring unresolvable {} selection: {}", kind, e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        let items: Vec<_> = assets.iter().map(asset_json).collect();
        let output = serde_json::json!({
            "event": "list",
            "kind": kind.as_str(),
            "selected": selected.as_ref().map(|a| a.identifier().to_string()),
            "assets": items,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("{} {}s:", assets.len(), kind);
    for asset in &assets {
        let marker = if selected.as_ref() == Some(asset) { "*" } else { " " };
        let origin = if asset.is_packaged() { "packaged" } else { "imported" };
        println!(
            "  {} {:<32} {:<9} {}",
            marker,
            asset.name(),
            origin,
            asset.identifier()
        );
    }
    Ok(())
}

fn cmd_delete(layout: &DataLayout, kind: AssetKind, path: &Path, json: bool) -> Result<()> {
    let report = library(layout).delete_path(kind, path)?;

    if json {
        let output = serde_json::json!({
            "event": "delete",
            "kind": kind.as_str(),
            "path": path.display().to_string(),
            "file_removed": report.outcome.file_removed,
            "record_removed": report.outcome.record_removed,
            "selection_cleared": report.selection_cleared,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        if !report.outcome.file_removed && !report.outcome.record_removed {
            println!("○ Nothing to delete at {}", path.display());
            return Ok(());
        }
        println!("✓ Deleted {}", path.display());
        if report.selection_cleared {
            println!("  Active {} selection cleared", kind);
        }
    }
    Ok(())
}

fn cmd_select(
    layout: &DataLayout,
    kind: AssetKind,
    identifier: &AssetIdentifier,
    json: bool,
) -> Result<()> {
    let asset = library(layout).select(kind, identifier)?;

    if json {
        let output = serde_json::json!({
            "event": "select",
            "kind": kind.as_str(),
            "asset": asset_json(&asset),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("✓ Active {}: {}", kind, asset.name());
    }
    Ok(())
}

fn cmd_show(layout: &DataLayout, json: bool) -> Result<()> {
    let settings = Settings::load_effective(&layout.settings_file())?;
    let plan = AppearancePlan::from_settings(&settings);

    if json {
        let output = serde_json::json!({
            "event": "show",
            "text": plan.text.as_ref().map(|t| serde_json::json!({
                "content": t.content,
                "size": t.size,
                "font": t.font.as_ref().map(|f| f.to_string()),
                "scale": t.transform.scale(),
                "rotation": t.transform.rotation_degrees,
            })),
            "image": plan.image.as_ref().map(|i| serde_json::json!({
                "source": i.source.to_string(),
                "scale": i.transform.scale(),
                "rotation": i.transform.rotation_degrees,
            })),
            "sound": plan.sound.as_ref().map(|s| serde_json::json!({
                "source": s.source.to_string(),
                "play_count": s.loop_mode.play_count(),
                "delay_ms": s.start_delay.as_millis() as u64,
            })),
            "vibration_amplitude": plan.vibration,
            "crack_delay_ms": plan.crack_delay.map(|d| d.as_millis() as u64),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match &plan.text {
        Some(text) => println!(
            "Text:      \"{}\" at {}sp, font {}",
            text.content,
            text.size,
            text.font
                .as_ref()
                .map(|f| f.to_string())
                .unwrap_or_else(|| "default".to_string())
        ),
        None => println!("Text:      hidden"),
    }
    match &plan.image {
        Some(image) => println!(
            "Image:     {} (scale {:.2}, {}°)",
            image.source,
            image.transform.scale(),
            image.transform.rotation_degrees
        ),
        None => println!("Image:     hidden"),
    }
    match &plan.sound {
        Some(sound) => println!(
            "Sound:     {} ({:?}) after {}s",
            sound.source,
            sound.loop_mode,
            sound.start_delay.as_secs()
        ),
        None => println!("Sound:     off"),
    }
    match plan.vibration {
        Some(amplitude) => println!("Vibration: amplitude {}", amplitude),
        None => println!("Vibration: off"),
    }
    match plan.crack_delay {
        Some(delay) => println!("Crack:     {}s after unlock", delay.as_secs()),
        None => println!("Crack:     off"),
    }
    Ok(())
}

fn cmd_settings(layout: &DataLayout, json: bool) -> Result<()> {
    let path = layout.settings_file();
    let (settings, warnings) = if path.exists() {
        Settings::load_with_warnings(&path)?
    } else {
        (Settings::default(), Vec::new())
    };
    let settings = settings.with_env_overrides();

    if json {
        let output = serde_json::json!({
            "event": "settings",
            "path": path.display().to_string(),
            "settings": settings,
            "warnings": warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    for warning in &warnings {
        eprintln!("⚠ {}", warning);
    }
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&settings)?);
    Ok(())
}

fn cmd_verify(
    package: &str,
    certificate: Option<&Path>,
    expected_digest: Option<String>,
    json: bool,
) -> Result<()> {
    let certificate = certificate
        .map(|path| {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        })
        .transpose()?;

    let mut policy = IntegrityPolicy::default();
    if let Some(digest) = expected_digest {
        policy = policy.with_expected_digest(digest);
    }
    let certificates: Vec<&[u8]> = certificate.iter().map(Vec::as_slice).collect();
    let verdict = policy.check(package, &certificates);

    if json {
        let output = serde_json::json!({
            "event": "verify",
            "trusted": verdict.is_trusted(),
            "digest": certificate.as_deref().map(signature_digest),
            "reason": match &verdict {
                IntegrityVerdict::Trusted => None,
                IntegrityVerdict::Tampered(reason) => Some(format!("{:?}", reason)),
            },
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match &verdict {
            IntegrityVerdict::Trusted => println!("✓ Trusted build"),
            IntegrityVerdict::Tampered(reason) => println!("✗ Tampered build: {:?}", reason),
        }
    }

    if !verdict.is_trusted() {
        std::process::exit(1);
    }
    Ok(())
}
