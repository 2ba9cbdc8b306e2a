//! CLI command implementations.

pub mod parse;
pub mod schema;

use std::io::Read;

use pastegrid::{NamingConvention, NumericLocale, PastegridConfig};
use tracing::debug;

use crate::cli::InputArgs;

/// Read the paste from the file, or from stdin when no file was given.
pub fn read_paste(args: &InputArgs) -> Result<String, Box<dyn std::error::Error>> {
    let paste = match &args.file {
        Some(path) => {
            if !path.exists() {
                return Err(format!("File not found: {}", path.display()).into());
            }
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!(bytes = paste.len(), from_stdin = args.file.is_none(), "read paste");
    Ok(paste)
}

/// Build the parse configuration from the flags.
pub fn build_config(args: &InputArgs) -> pastegrid::Result<PastegridConfig> {
    let convention: NamingConvention = args.convention.parse()?;
    let config = PastegridConfig::default().with_convention(convention);

    if args.no_locale {
        Ok(config.without_locale())
    } else {
        let locale: NumericLocale = args.locale.parse()?;
        Ok(config.with_locale(locale))
    }
}
