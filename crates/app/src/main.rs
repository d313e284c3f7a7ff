//! QueryLens - Main Entry Point
//!
//! Loads settings, picks the tab and clipboard adapters, and runs one
//! editing session on the console.

mod host;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use querylens_application::{ParamEditor, TabId};
use querylens_domain::ClipboardStrategy;
use querylens_infrastructure::{
    DevToolsTabAccessor, InMemoryTab, SettingsRepository, TracingNotifier,
};
use querylens_ui::{PipedLines, Readline, SessionEnd, Style, run_session};
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::host::{HostClipboard, HostTabs};

/// Edit the query parameters of a URL and apply the result.
#[derive(Debug, Parser)]
#[command(name = "querylens", version, about)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "devtools"])))]
struct Cli {
    /// Edit this URL.
    #[arg(long)]
    url: Option<String>,

    /// Edit the foreground page of a Chromium browser started with
    /// --remote-debugging-port.
    #[arg(long)]
    devtools: bool,

    /// DevTools endpoint (overrides the settings file).
    #[arg(long, requires = "devtools")]
    endpoint: Option<String>,

    /// Behave like the inspector panel: stay open after apply and copy
    /// through the terminal.
    #[arg(long)]
    panel: bool,

    /// Disable clipboard actions.
    #[arg(long)]
    no_clipboard: bool,

    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Settings file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let repo = cli
        .settings
        .clone()
        .map_or_else(SettingsRepository::new, SettingsRepository::at);
    let mut settings = repo.load().await?;
    if cli.panel {
        settings.close_on_apply = false;
        settings.clipboard_strategy = ClipboardStrategy::Fallback;
    }
    if cli.no_clipboard {
        settings.clipboard_strategy = ClipboardStrategy::Unavailable;
    }
    if let Some(endpoint) = &cli.endpoint {
        settings.devtools_endpoint.clone_from(endpoint);
    }
    tracing::debug!(?settings, path = ?repo.path(), "settings loaded");

    let tabs = match &cli.url {
        Some(url) => HostTabs::Memory(InMemoryTab::new(Some(TabId::from(1)), url.as_str())),
        None => HostTabs::DevTools(DevToolsTabAccessor::new(&settings.devtools_endpoint)?),
    };
    let clipboard = HostClipboard::for_strategy(settings.clipboard_strategy);
    let capabilities = settings.capabilities();

    let mut editor = ParamEditor::new(
        tabs,
        clipboard,
        TracingNotifier::new(),
        capabilities,
        settings,
    );
    if let Err(e) = editor.start().await {
        tracing::warn!(error = %e, "starting without a loaded URL");
    }

    let style = Style {
        color: !cli.no_color && io::stdout().is_terminal(),
    };
    let mut stdout = io::stdout();
    let end = if io::stdin().is_terminal() {
        let mut input = Readline::new()?;
        run_session(&mut editor, &mut input, &mut stdout, style).await?
    } else {
        let mut input = PipedLines::new(BufReader::new(tokio::io::stdin()));
        run_session(&mut editor, &mut input, &mut stdout, style).await?
    };

    if let SessionEnd::Committed { url } = end {
        println!("{url}");
    }

    Ok(())
}
