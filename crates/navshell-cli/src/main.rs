//! navshell CLI: adaptive navigation shell in the terminal

use clap::{Parser, Subcommand};
use navshell_core::{layout, BreakpointClass, PlatformKind, ShellConfig, SizeClass, ViewportSample};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Adaptive navigation shell for the terminal
#[derive(Parser)]
#[command(name = "navshell")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = ".navshell/config.json")]
    config: PathBuf,

    /// Platform kind reported to the shell (web or native)
    #[arg(long, global = true)]
    platform: Option<PlatformKind>,

    /// Log file path
    #[arg(long, global = true, default_value = ".navshell/navshell.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Resolve the breakpoint and layout for a viewport size
    Layout {
        /// Viewport width in logical pixels
        #[arg(long)]
        width: u32,

        /// Viewport height in logical pixels
        #[arg(long, default_value = "800")]
        height: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the layout chosen for every platform and breakpoint
    Table {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init,
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_file);

    match cli.command {
        None | Some(Commands::Tui) => {
            let config = load_config(&cli.config, cli.platform);
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => fail(&format!("Failed to create tokio runtime: {e}")),
            };
            if let Err(e) = rt.block_on(navshell_tui::run_tui(config)) {
                fail(&e.to_string());
            }
        }
        Some(Commands::Layout {
            width,
            height,
            json,
        }) => {
            let platform = cli
                .platform
                .unwrap_or_else(|| load_config(&cli.config, None).platform);
            cmd_layout(ViewportSample::new(width, height, platform), json);
        }
        Some(Commands::Table { json }) => cmd_table(json),
        Some(Commands::Init) => {
            cmd_init(&cli.config, cli.platform);
        }
    }
}

/// Send tracing output to a file so it never corrupts the terminal UI.
fn init_logging(path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open {}: {e}", path.display());
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn load_config(path: &Path, platform: Option<PlatformKind>) -> ShellConfig {
    let mut config = match ShellConfig::load_or_default(path) {
        Ok(config) => config,
        Err(e) => fail(&format!("Failed to load {}: {e}", path.display())),
    };
    if let Some(platform) = platform {
        config.platform = platform;
    }
    debug!(path = %path.display(), ?config, "Config loaded");
    config.with_env()
}

fn describe_layout(sample: ViewportSample) -> serde_json::Value {
    serde_json::json!({
        "width": sample.width,
        "height": sample.height,
        "platform": sample.platform.as_str(),
        "breakpoint": BreakpointClass::from_width(sample.width).as_str(),
        "size_class": SizeClass::from_width(sample.width).as_str(),
        "layout": layout::for_sample(sample).as_str(),
    })
}

fn cmd_layout(sample: ViewportSample, json: bool) {
    let description = describe_layout(sample);

    if json {
        match serde_json::to_string_pretty(&description) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&format!("Failed to serialize: {e}")),
        }
        return;
    }

    println!(
        "{}x{} ({})",
        sample.width,
        sample.height,
        sample.platform.as_str()
    );
    println!("  Breakpoint: {}", BreakpointClass::from_width(sample.width));
    println!("  Size class: {}", SizeClass::from_width(sample.width));
    println!("  Layout:     {}", layout::for_sample(sample));
}

fn describe_table() -> serde_json::Value {
    let rows: Vec<serde_json::Value> = layout::table()
        .into_iter()
        .map(|(platform, breakpoint, layout)| {
            serde_json::json!({
                "platform": platform.as_str(),
                "breakpoint": breakpoint.as_str(),
                "layout": layout.as_str(),
            })
        })
        .collect();
    serde_json::Value::Array(rows)
}

fn cmd_table(json: bool) {
    if json {
        match serde_json::to_string_pretty(&describe_table()) {
            Ok(text) => println!("{text}"),
            Err(e) => fail(&format!("Failed to serialize: {e}")),
        }
        return;
    }

    println!("{:<8} {:<10} Layout", "Platform", "Breakpoint");
    for (platform, breakpoint, layout) in layout::table() {
        println!(
            "{:<8} {:<10} {layout}",
            platform.as_str(),
            breakpoint.as_str()
        );
    }
}

fn cmd_init(path: &Path, platform: Option<PlatformKind>) {
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return;
    }

    let mut config = ShellConfig::default();
    if let Some(platform) = platform {
        config.platform = platform;
    }
    match config.save(path) {
        Ok(()) => {
            info!(path = %path.display(), "Config created");
            println!("Created {}", path.display());
        }
        Err(e) => fail(&format!("Failed to write config: {e}")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}
