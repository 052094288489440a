use std::{path::PathBuf, rc::Rc};

use anyhow::{bail, Context, Result};
use clap::Parser;
use controller_bridge::{load_config, Bridge};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod view;

use view::{EditorPanel, MainWindow, StatusBar};

#[derive(Parser, Debug)]
struct Args {
    /// Bridge config file (defaults to ./bridge.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, conflicts_with = "quiet")]
    verbose: bool,
    #[arg(long)]
    quiet: bool,
    #[arg(long, default_value_t = 2)]
    sub_controllers: usize,
    /// Register every editor panel twice
    #[arg(long)]
    register_twice: bool,
    /// Print retained diagnostics as JSON
    #[arg(long)]
    json: bool,
    #[arg(long, default_value = "Untitled")]
    title: String,
    /// Events the simulated framework fires, in order
    #[arg(default_values_t = ["on_save".to_string(), "on_cancel".to_string()])]
    events: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref()).context("failed to load bridge config")?;
    if args.verbose {
        config.verbose = true;
    }
    if args.quiet {
        config.verbose = false;
    }
    info!(verbose = config.verbose, "bridge configured");

    let bridge = Rc::new(Bridge::new(config));
    let window = MainWindow::load(&bridge, &args.title);
    bridge.register(&window)?;

    let panels: Vec<_> = (0..args.sub_controllers)
        .map(|index| EditorPanel::load(format!("panel-{index}")))
        .collect();
    for panel in &panels {
        bridge.register(panel)?;
        if args.register_twice {
            bridge.register(panel)?;
        }
    }
    let status_bar = StatusBar::load();
    bridge.register(&status_bar)?;

    info!(
        members = bridge.member_count(),
        handlers = bridge.handler_count(),
        "controllers interlaced"
    );

    for event in &args.events {
        let Some(outcome) = window.borrow().fire(event) else {
            bail!("main window has no trampoline for event '{event}'");
        };
        let invoked = outcome.with_context(|| format!("relaying '{event}' failed"))?;
        println!("{event}: {invoked} handler(s) invoked");
    }

    for panel in &panels {
        let panel = panel.borrow();
        let button = panel
            .save_button()
            .map(|button| format!("{} ({})", button.id, button.text))
            .unwrap_or_else(|| "-".into());
        let title = panel
            .title_field()
            .map(|field| format!("{} = '{}'", field.id, field.text.borrow()))
            .unwrap_or_else(|| "-".into());
        println!(
            "{}: save_button={button} title_field={title} saved={} cancelled={} status='{}'",
            panel.name,
            panel.saved.len(),
            panel.cancelled,
            panel.status()
        );
    }
    {
        let status_bar = status_bar.borrow();
        println!(
            "status-bar: cancel_button injected={} closed={}",
            status_bar.has_cancel_button(),
            status_bar.closed
        );
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&bridge.take_diagnostics())?
        );
    }

    Ok(())
}
