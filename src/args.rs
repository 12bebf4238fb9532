use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rodauth-translations")]
#[command(version)]
#[command(about = "Generate rodauth locale files for the host application", long_about = None)]
pub(crate) struct Cli {
    /// Locales to generate (e.g. en pt). Defaults to the locales the host
    /// application has configured via RODAUTH_LOCALES.
    pub locales: Vec<String>,

    /// Overwrite existing locale files, refreshing shipped keys while
    /// keeping any custom keys they contain
    #[arg(long)]
    pub force: bool,

    /// Application root containing config/locales
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}
