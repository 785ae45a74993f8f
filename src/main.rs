use clap::Parser;
use icondeck::{build_catalog, report, Startup};
use icondeck_core::clipboard::copy_to_clipboard;
use icondeck_core::config::Config;
use icondeck_tui::SystemClipboard;

#[derive(Parser)]
#[command(name = "icondeck", about = "icondeck: browse, preview and copy glyph icons")]
struct Cli {
    /// Write debug logs to /tmp/icondeck-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Start with this search query.
    #[arg(long)]
    query: Option<String>,

    /// Start with this preview size in pixels (12–256).
    #[arg(long, value_parser = clap::value_parser!(u32).range(12..=256))]
    size: Option<u32>,

    /// Start with this icon color (any text; used verbatim in the snippet).
    #[arg(long)]
    color: Option<String>,

    /// Start on the dark background.
    #[arg(long)]
    dark: bool,

    /// Print the catalog view to stdout and exit instead of opening the TUI.
    #[arg(long)]
    print: bool,

    /// With --print: also copy the usage snippet to the clipboard.
    #[arg(long, requires = "print")]
    copy: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/icondeck-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("icondeck debug log started, tail -f /tmp/icondeck-debug.log");
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "config: unreadable, using defaults");
        Config::defaults()
    });
    let startup = Startup {
        query: cli.query,
        size: cli.size,
        color: cli.color,
        dark: cli.dark,
    };
    let catalog = build_catalog(&config, &startup);

    if cli.print {
        print!("{}", report(&catalog));
        if cli.copy {
            let outcome = copy_to_clipboard(&SystemClipboard, &catalog.usage());
            eprintln!("{}", if outcome.is_copied() { "copied" } else { "copy failed" });
        }
        return Ok(());
    }

    icondeck_tui::run(catalog, config)
}
