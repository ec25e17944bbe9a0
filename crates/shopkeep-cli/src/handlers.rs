use std::io::{BufRead, Write, stderr};

use anyhow::{Context as _, Result};
use shopkeep_core::ShopConfig;
use shopkeep_routing::IntentRouter;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::Cli;

/// Words that end an interactive session.
const EXIT_WORDS: [&str; 2] = ["quit", "exit"];

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "shopkeep_core=debug,shopkeep_routing=debug,shopkeep_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let initialized = fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(true)
        .try_init();
    if initialized.is_err() {
        tracing::debug!("Logging already initialized");
    }
}

/// Load the configuration and apply command-line overrides.
///
/// # Errors
/// Returns an error if the configuration cannot be read or created
pub fn load_config(cli: &Cli) -> Result<ShopConfig> {
    let mut config = match &cli.config {
        Some(path) => ShopConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ShopConfig::load_or_create().context("Failed to load default config")?,
    };

    if let Some(catalog) = &cli.catalog {
        config.catalog_path.clone_from(catalog);
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    Ok(config)
}

/// Build the router over the configured catalog.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded or seeded
pub fn build_router(config: &ShopConfig) -> Result<IntentRouter> {
    let router = IntentRouter::load(config).with_context(|| {
        format!(
            "Failed to load catalog from {}",
            config.catalog_path.display()
        )
    })?;
    tracing::info!(
        "Serving {} items in {}",
        router.context().catalog().len(),
        config.locale
    );
    Ok(router)
}

/// Answer each query in order, one reply per block.
///
/// # Errors
/// Returns an error if writing to `output` fails
pub fn answer_queries<W: Write>(
    router: &IntentRouter,
    queries: &[String],
    output: &mut W,
) -> Result<()> {
    for query in queries {
        writeln!(output, "{}", router.answer(query).trim_end())?;
    }
    output.flush()?;
    Ok(())
}

/// Greet, then answer input line by line until EOF or an exit word.
///
/// # Errors
/// Returns an error if reading input or writing output fails
pub fn run_session<R: BufRead, W: Write>(
    router: &IntentRouter,
    input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", router.context().formatter().messages().greeting)?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if EXIT_WORDS.contains(&line.trim().to_lowercase().as_str()) {
            tracing::debug!("Session ended by user");
            break;
        }
        writeln!(output, "{}", router.answer(&line).trim_end())?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkeep_core::{Catalog, Locale};
    use std::io::Cursor;
    use std::sync::Arc;

    fn router(locale: Locale) -> IntentRouter {
        let config = ShopConfig {
            locale,
            ..ShopConfig::default()
        };
        IntentRouter::new(Arc::new(Catalog::seeded()), &config)
    }

    #[test]
    fn test_session_greets_and_stops_at_exit() {
        let mut output = Vec::new();
        let input = Cursor::new("size M\nQUIT\nthanks\n");
        run_session(&router(Locale::English), input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Hello! I'm your virtual assistant."));
        assert!(text.contains("Vestido negro"));
        assert!(!text.contains("Thank you!"));
    }

    #[test]
    fn test_session_ends_at_eof() {
        let mut output = Vec::new();
        run_session(&router(Locale::Spanish), Cursor::new("gracias"), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "¡Hola! Soy tu asistente virtual. ¿En qué puedo ayudarte hoy?\n\
             ¡Gracias! Estoy aquí para ayudarte con lo que necesites.\n"
        );
    }

    #[test]
    fn test_answer_queries_in_order() {
        let mut output = Vec::new();
        let queries = vec![String::new(), "xyzzy".to_owned()];
        answer_queries(&router(Locale::English), &queries, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Please enter a message before sending.\n\
             Sorry, I couldn't find any products matching your search.\n"
        );
    }
}
