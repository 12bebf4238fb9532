mod args;

use args::Cli;
use clap::Parser;
use rodauth_translations::{clienv, locales, Outcome, TranslationsError, TranslationsGenerator};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let locales = match locales::resolve(cli.locales, clienv::available_locales()) {
        Ok(locales) => locales,
        Err(err @ TranslationsError::NoLocalesAvailable) => {
            println!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let generator = TranslationsGenerator::new(cli.root, cli.force);
    for locale in &locales {
        match generator.generate(locale)? {
            Outcome::NoTranslations => println!("No translations for locale: {locale}"),
            outcome => tracing::debug!(%locale, ?outcome, "Locale processed"),
        }
    }

    Ok(())
}
