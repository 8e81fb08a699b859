use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ShapecastError, ShapecastResult};
use crate::host::model::{Guid, HostSymbol};
use crate::publish::config::PublishConfig;
use crate::timeline::tween::TweenerDef;

/// Exported authoring document: options, tweeners and symbol timelines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Publish options.
    #[serde(default)]
    pub config: PublishConfig,
    /// Tweeners keyed by GUID.
    #[serde(default)]
    pub tweeners: BTreeMap<Guid, TweenerDef>,
    /// Symbols in publish order.
    #[serde(default)]
    pub symbols: Vec<HostSymbol>,
}

impl Document {
    /// Parse a document from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShapecastResult<Self> {
        let doc: Self = serde_json::from_reader(r)
            .map_err(|e| ShapecastError::serde(format!("parse document JSON: {e}")))?;
        doc.validate()?;
        Ok(doc)
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShapecastResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShapecastError::validation(format!("open document '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check the config and symbol names.
    pub fn validate(&self) -> ShapecastResult<()> {
        self.config.validate()?;
        let mut seen = std::collections::HashSet::new();
        for symbol in &self.symbols {
            if symbol.name.is_empty() {
                return Err(ShapecastError::validation("symbol name must not be empty"));
            }
            if !seen.insert(symbol.name.as_str()) {
                return Err(ShapecastError::validation(format!(
                    "duplicate symbol name '{}'",
                    symbol.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/document.rs"]
mod tests;
