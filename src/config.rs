use std::collections::BTreeSet;

use crate::foundation::error::{SplitError, SplitResult};

/// Element tags that receive generated ids by default.
pub const DEFAULT_ID_TAGS: [&str; 10] = [
    "rect", "circle", "ellipse", "line", "polyline", "polygon", "path", "text", "g", "image",
];

/// Options for the document-level analysis passes.
///
/// Every field has a default, so `{}` is a valid JSON configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalyzeOpts {
    /// Split every compound `<path>` into one element per shape.
    #[serde(default = "default_true")]
    pub split_paths: bool,
    /// Give unlabeled drawable elements a generated id.
    #[serde(default = "default_true")]
    pub assign_ids: bool,
    /// Tags considered drawable for id assignment.
    #[serde(default = "default_id_tags")]
    pub id_tags: Vec<String>,
}

impl Default for AnalyzeOpts {
    fn default() -> Self {
        Self {
            split_paths: true,
            assign_ids: true,
            id_tags: default_id_tags(),
        }
    }
}

impl AnalyzeOpts {
    /// Parse options from JSON and validate them.
    pub fn from_json(text: &str) -> SplitResult<Self> {
        let opts: Self = serde_json::from_str(text)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject empty or duplicated tag names.
    pub fn validate(&self) -> SplitResult<()> {
        let mut seen = BTreeSet::new();
        for tag in &self.id_tags {
            if tag.trim().is_empty() {
                return Err(SplitError::validation("id_tags entries must be non-empty"));
            }
            if !seen.insert(tag.as_str()) {
                return Err(SplitError::validation(format!(
                    "id_tags contains '{tag}' more than once"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn is_id_tag(&self, tag: &str) -> bool {
        self.id_tags.iter().any(|t| t == tag)
    }
}

fn default_true() -> bool {
    true
}

fn default_id_tags() -> Vec<String> {
    DEFAULT_ID_TAGS.iter().map(|t| (*t).to_owned()).collect()
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
