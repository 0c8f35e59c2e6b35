use crate::scrapers::types::DEFAULT_DESCRIPTION_DELIMITER;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const PARTS: usize = 3;

/// The three facets of a listing's short engine line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineDescription {
    pub engine: Option<String>,
    pub power: Option<String>,
    pub description: Option<String>,
}

/// Splits "1 968 cm3 • 150 KM • Comfortline" style text
#[derive(Debug, Clone)]
pub struct DescriptionParser {
    delimiter: String,
}

impl DescriptionParser {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Never fails. Blank input gives three `None`s; fewer than three
    /// segments are padded with `None`; segments past the third are dropped.
    pub fn parse(&self, text: Option<&str>) -> EngineDescription {
        let text = match text.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!("Engine description text is empty or missing");
                return EngineDescription::default();
            }
        };

        let mut segments: Vec<Option<String>> = if self.delimiter.is_empty() {
            vec![Some(text.to_string())]
        } else {
            text.split(self.delimiter.as_str())
                .take(PARTS)
                .map(|part| {
                    let part = part.trim();
                    (!part.is_empty()).then(|| part.to_string())
                })
                .collect()
        };

        if segments.len() < PARTS {
            warn!(text, "Engine description does not contain all expected parts");
            segments.resize(PARTS, None);
        }

        let mut segments = segments.into_iter();
        let parsed = EngineDescription {
            engine: segments.next().flatten(),
            power: segments.next().flatten(),
            description: segments.next().flatten(),
        };
        debug!(?parsed, "Engine description parsed");
        parsed
    }
}

impl Default for DescriptionParser {
    fn default() -> Self {
        Self::new(DEFAULT_DESCRIPTION_DELIMITER)
    }
}
