use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use transly::translate::{GoogleTranslator, TranslationEngine};
use transly::{config, languages, Config, ThemeStore};

#[derive(Parser)]
#[command(name = "transly")]
#[command(author, version, about = "Debounced as-you-type translation for the terminal", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive translator (default mode)
    Tui,

    /// One-shot translation
    Translate {
        /// Text to translate
        text: String,

        /// Source language code (defaults to the configured one)
        #[arg(long)]
        from: Option<String>,

        /// Target language code (defaults to the configured one)
        #[arg(long)]
        to: Option<String>,
    },

    /// List the language catalog
    Languages,

    /// Configure settings
    Config {
        /// Set the theme (light, dark)
        #[arg(long)]
        theme: Option<String>,

        /// Set the default source language code
        #[arg(long)]
        source_lang: Option<String>,

        /// Set the default target language code
        #[arg(long)]
        target_lang: Option<String>,

        /// Set the debounce interval in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("transly=debug")
    } else {
        EnvFilter::new("transly=info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let config = Config::load()?;
            let store = ThemeStore::open()?;
            let runtime = tokio::runtime::Runtime::new()?;
            transly::tui::run(runtime.handle().clone(), &config, store)?;
        }

        Commands::Translate { text, from, to } => {
            if text.trim().is_empty() {
                return Ok(());
            }

            let config = Config::load()?;
            let from = from.unwrap_or(config.panel.source_lang);
            let to = to.unwrap_or(config.panel.target_lang);

            for code in [&from, &to] {
                if !languages::is_supported(code) {
                    anyhow::bail!(
                        "unknown language code: {} (see `transly languages`)",
                        code
                    );
                }
            }

            info!("Translating {} -> {}", from, to);
            let translator =
                GoogleTranslator::new(&config.translator.endpoint, config.translator.timeout_secs);
            let runtime = tokio::runtime::Runtime::new()?;
            let translated = runtime.block_on(translator.translate(&text, &from, &to))?;
            println!("{}", translated);
        }

        Commands::Languages => {
            for lang in languages::all() {
                println!("{:<8} {}", lang.code, lang.label);
            }
        }

        Commands::Config {
            theme,
            source_lang,
            target_lang,
            debounce_ms,
            show,
        } => {
            if show {
                config::show()?;
            } else {
                config::update(theme, source_lang, target_lang, debounce_ms)?;
            }
        }
    }

    Ok(())
}
