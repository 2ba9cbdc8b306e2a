//! Main Pastegrid struct and public API.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::NumericLocale;
use crate::error::{InvalidTableKind, Result};
use crate::inference::TypeInferencer;
use crate::input::{
    RawMatrix, SourceFormat, SourceMetadata, detect, looks_like_html, parse_html_table,
};
use crate::naming::{IdentifierNormalizer, NamingConvention, ScriptRange};
use crate::schema::StructuredTable;

/// Configuration for a parse. Read once per call, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastegridConfig {
    /// Separator convention for numbers; `None` means unset.
    pub locale: Option<NumericLocale>,
    /// Casing applied to header names.
    pub convention: NamingConvention,
    /// Non-ASCII letters kept in header names.
    pub script: ScriptRange,
}

impl Default for PastegridConfig {
    fn default() -> Self {
        Self {
            locale: Some(NumericLocale::CommaDot),
            convention: NamingConvention::Default,
            script: ScriptRange::CYRILLIC,
        }
    }
}

impl PastegridConfig {
    pub fn with_locale(mut self, locale: NumericLocale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Clear the locale; numeric-looking cells then fail to classify.
    pub fn without_locale(mut self) -> Self {
        self.locale = None;
        self
    }

    pub fn with_convention(mut self, convention: NamingConvention) -> Self {
        self.convention = convention;
        self
    }

    pub fn with_script(mut self, script: ScriptRange) -> Self {
        self.script = script;
        self
    }
}

/// Turns pasted text into a [`StructuredTable`].
#[derive(Debug, Clone, Default)]
pub struct Pastegrid {
    config: PastegridConfig,
}

impl Pastegrid {
    /// Create a new instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(PastegridConfig::default())
    }

    /// Create an instance with custom configuration.
    pub fn with_config(config: PastegridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PastegridConfig {
        &self.config
    }

    /// Parse a paste into a typed table.
    pub fn parse(&self, input: &str) -> Result<StructuredTable> {
        self.parse_with_source(input).map(|(table, _)| table)
    }

    /// Parse a paste, also reporting which branch and delimiter were used.
    pub fn parse_with_source(&self, input: &str) -> Result<(StructuredTable, SourceMetadata)> {
        let (matrix, source) = self.extract(input)?;

        let inferred = TypeInferencer::new(self.config.locale).infer(&matrix)?;

        let normalizer =
            IdentifierNormalizer::new(self.config.convention).with_script(self.config.script);
        let headers: Vec<String> = inferred
            .headers
            .iter()
            .map(|h| normalizer.normalize(h))
            .collect();

        let table = StructuredTable::new(headers, inferred.rows, inferred.column_types);
        let metadata = SourceMetadata::new(source, table.row_count(), table.column_count());
        debug!(
            format = %metadata.format,
            rows = metadata.row_count,
            columns = metadata.column_count,
            "parsed table"
        );

        Ok((table, metadata))
    }

    /// Extract the raw matrix from either branch.
    pub fn extract(&self, input: &str) -> Result<(RawMatrix, SourceFormat)> {
        if input.trim().is_empty() {
            return Err(InvalidTableKind::EmptyInput.into());
        }

        if looks_like_html(input) {
            debug!("input contains a <table>, using HTML branch");
            let matrix = parse_html_table(input)?;
            Ok((matrix, SourceFormat::Html))
        } else {
            let detected = detect(input)?;
            Ok((detected.matrix, SourceFormat::Delimited(detected.delimiter)))
        }
    }
}

/// Parse `input` with `config`.
pub fn parse_table(input: &str, config: &PastegridConfig) -> Result<StructuredTable> {
    Pastegrid::with_config(*config).parse(input)
}
