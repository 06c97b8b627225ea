use anyhow::Result;
use clap::Parser;

use mdt_version::manifest::Manifest;
use mdt_version::transition::{self, Action};
use mdt_version::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "mdt-version",
    about = "Advance the manifest version through its pre-release lifecycle"
)]
struct Args {
    #[arg(help = "Action to apply: dev, alpha, beta, rc, release, minor, patch")]
    action: Option<String>,

    #[arg(long, help = "Preview the result without modifying the manifest")]
    dry_run: bool,

    #[arg(short, long, help = "Path to the JSON manifest to update")]
    manifest: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("mdt-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let action_arg = match args.action {
        Some(action) => action,
        None => {
            ui::display_error(
                "Missing action - valid actions are dev, alpha, beta, rc, release, minor, patch",
            );
            std::process::exit(1);
        }
    };

    // Reject the action string before touching any file
    let action = match action_arg.parse::<Action>() {
        Ok(action) => action,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let manifest_path = args.manifest.unwrap_or(config.manifest);
    let manifest = Manifest::new(&manifest_path, &config.field);

    // Parse the current version, then validate the transition, then compute;
    // nothing is written until all three have succeeded.
    let current = match manifest.read_version() {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let next = match transition::apply(&current, action) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_transition(&current, &next);

    if args.dry_run {
        let rendered = match manifest.render_with(&next) {
            Ok(rendered) => rendered,
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        };
        ui::display_dry_run(&manifest_path, &rendered);
        return Ok(());
    }

    if let Err(e) = manifest.write_version(&next) {
        ui::display_error(&format!("Failed to update '{}': {}", manifest_path, e));
        std::process::exit(1);
    }
    ui::display_success(&format!("Updated {} to {}", manifest_path, next));

    Ok(())
}
