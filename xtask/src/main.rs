//! Build automation for the skin editor
//!
//! Usage:
//!   cargo xtask build-web          # Build WASM and assemble dist/web
//!   cargo xtask build-web --debug  # Same, unoptimized
//!   cargo xtask package-web        # Zip dist/web for upload

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const WASM_NAME: &str = "skin-editor.wasm";
const MQ_JS_BUNDLE: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the skin editor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM and collect everything the browser needs in dist/web
    BuildWeb {
        /// Skip --release
        #[arg(long)]
        debug: bool,
    },
    /// Build web and zip dist/web into dist/skin-editor-web.zip
    PackageWeb,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { debug } => build_web(debug),
        Commands::PackageWeb => package_web(),
    }
}

/// Workspace root (parent of the xtask crate)
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask crate has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(Command::new("curl").args(["-L", "-o"]).arg(dest).arg(url))
}

fn build_web(debug: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");
    let profile = if debug { "debug" } else { "release" };

    println!("Building WASM ({})...", profile);
    let mut cargo = Command::new("cargo");
    cargo
        .current_dir(&root)
        .args(["build", "-p", "skin-editor", "--target", "wasm32-unknown-unknown"]);
    if !debug {
        cargo.arg("--release");
    }
    run_cmd(&mut cargo)?;

    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = root.join("target/wasm32-unknown-unknown").join(profile).join(WASM_NAME);
    std::fs::copy(&wasm, dist.join(WASM_NAME))
        .with_context(|| format!("copying {}", wasm.display()))?;

    let index = root.join("docs/index.html");
    std::fs::copy(&index, dist.join("index.html"))
        .with_context(|| format!("copying {}", index.display()))?;

    let mq_js = dist.join("mq_js_bundle.js");
    download_file(MQ_JS_BUNDLE, &mq_js)?;

    println!("Web build complete: dist/web/");
    Ok(())
}

fn package_web() -> Result<()> {
    build_web(false)?;

    let dist = project_root()?.join("dist");
    let zip_path = dist.join("skin-editor-web.zip");
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", "../skin-editor-web.zip", "."]),
    )?;

    println!("Package ready: dist/skin-editor-web.zip");
    Ok(())
}
