//! Decides whether and what to write for each locale.

use crate::error::{Result, TranslationsError};
use crate::{store, tree};
use serde_yml::Mapping;
use std::fs;
use std::path::{Path, PathBuf};

/// Where locale files land, relative to the application root.
const LOCALES_DIR: &str = "config/locales";

/// Terminal state for a single locale. Exactly one per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Canonical translations written to a fresh file.
    Created(PathBuf),
    /// Existing file re-written with canonical keys refreshed and custom
    /// keys preserved (force mode).
    Merged(PathBuf),
    /// Existing file left untouched because force was not given.
    Skipped(PathBuf),
    /// The plugin ships no translations for this locale.
    NoTranslations,
}

#[derive(Debug)]
pub struct TranslationsGenerator {
    root: PathBuf,
    force: bool,
}

impl TranslationsGenerator {
    pub fn new(root: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            root: root.into(),
            force,
        }
    }

    /// config/locales/rodauth.<locale>.yml under the application root.
    pub fn destination(&self, locale: &str) -> PathBuf {
        self.root
            .join(LOCALES_DIR)
            .join(format!("rodauth.{locale}.yml"))
    }

    pub fn generate(&self, locale: &str) -> Result<Outcome> {
        let Some(canonical) = store::lookup(locale) else {
            return Ok(Outcome::NoTranslations);
        };

        let path = self.destination(locale);
        if !path.exists() {
            self.write(&path, locale, &canonical)?;
            return Ok(Outcome::Created(path));
        }
        if !self.force {
            tracing::debug!(path = %path.display(), "Existing file left untouched");
            return Ok(Outcome::Skipped(path));
        }

        let existing = self.read_existing(&path, locale)?;
        let merged = tree::merge(&canonical, &existing);
        self.write(&path, locale, &merged)?;
        Ok(Outcome::Merged(path))
    }

    fn read_existing(&self, path: &Path, locale: &str) -> Result<Mapping> {
        let content = fs::read_to_string(path)?;
        match tree::parse_document(&content, locale) {
            Ok(Some(translations)) => Ok(translations),
            Ok(None) => Err(TranslationsError::UnexpectedShape {
                path: path.to_path_buf(),
                locale: locale.to_string(),
            }),
            Err(source) => Err(TranslationsError::Malformed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, locale: &str, translations: &Mapping) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, tree::to_yaml(locale, translations))?;
        tracing::debug!(path = %path.display(), "Wrote translations");
        Ok(())
    }
}
