//! Build automation tasks for PLANK
//!
//! Usage:
//!   cargo xtask build-web            # Build WASM + index.html into dist/web
//!   cargo xtask package              # Native release build into dist/<platform>
//!   cargo xtask package --zip        # ...and zip it

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BINARY: &str = "plank";
const MACROQUAD_JS: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for PLANK")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds a DEV tag to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Build a native release with the sample levels
    Package {
        /// Target platform label: windows, macos, linux (defaults to host)
        #[arg(long)]
        platform: Option<String>,
        /// Also create dist/plank-<platform>.zip
        #[arg(long)]
        zip: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::Package { platform, zip } => package(platform, zip),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live one level below the project root")
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

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Recreate `dir` empty
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir).with_context(|| format!("Failed to clean {}", dir.display()))?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

fn index_html(dev: bool) -> String {
    let title = if dev { "[DEV] PLANK" } else { "PLANK" };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
html, body, canvas {{ margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; background: #1c1c21; }}
</style>
</head>
<body>
<canvas id="glcanvas" tabindex="1"></canvas>
<script src="mq_js_bundle.js"></script>
<script>load("{BINARY}.wasm");</script>
</body>
</html>
"#
    )
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown"]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BINARY);
    std::fs::copy(root.join("target/wasm32-unknown-unknown/release").join(&wasm), dist.join(&wasm))
        .context("WASM binary missing after build")?;

    std::fs::write(dist.join("index.html"), index_html(dev))?;

    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(MACROQUAD_JS, &mq_js)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

fn host_platform() -> String {
    if cfg!(target_os = "windows") {
        "windows".to_string()
    } else if cfg!(target_os = "macos") {
        "macos".to_string()
    } else {
        "linux".to_string()
    }
}

/// Native release build
fn package(platform: Option<String>, zip: bool) -> Result<()> {
    let root = project_root()?;
    let platform = platform.unwrap_or_else(host_platform);
    let dist = root.join(format!("dist/{}", platform));

    println!("Building native release for {}...", platform);
    run_cmd(Command::new("cargo").current_dir(&root).args(["build", "--release"]))?;

    fresh_dir(&dist)?;

    let binary_name = if platform == "windows" { format!("{}.exe", BINARY) } else { BINARY.to_string() };
    std::fs::copy(root.join("target/release").join(&binary_name), dist.join(&binary_name))
        .with_context(|| format!("Release binary {} missing", binary_name))?;

    let levels = root.join("levels");
    if levels.is_dir() {
        copy_dir_recursive(&levels, &dist.join("levels"))?;
    }

    if zip {
        let zip_name = format!("{}-{}.zip", BINARY, platform);
        let zip_path = root.join("dist").join(&zip_name);
        if zip_path.exists() {
            std::fs::remove_file(&zip_path)?;
        }
        println!("Creating {}...", zip_name);
        run_cmd(
            Command::new("zip")
                .current_dir(&dist)
                .args(["-r", &format!("../{}", zip_name), "."]),
        )?;
    }

    println!("Package complete: dist/{}/", platform);
    Ok(())
}
