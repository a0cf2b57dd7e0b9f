//! Wire types of the execution API

use crate::catalog::LanguageId;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of one run submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRequest {
    pub source_code: String,
    pub language_id: LanguageId,
    pub stdin: String,
}

impl RunRequest {
    pub fn new(
        source_code: impl Into<String>,
        language_id: LanguageId,
        stdin: impl Into<String>,
    ) -> Self {
        RunRequest {
            source_code: source_code.into(),
            language_id,
            stdin: stdin.into(),
        }
    }
}

/// `status` object of a result
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatusInfo {
    #[serde(default)]
    pub description: Option<String>,
}

/// Result document returned by the execution API. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunResult {
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub status: Option<StatusInfo>,
    /// Wall time in seconds, as the server wrote it
    #[serde(default, deserialize_with = "raw_measure")]
    pub time: Option<String>,
    /// Peak memory in kilobytes, as the server wrote it
    #[serde(default, deserialize_with = "raw_measure")]
    pub memory: Option<String>,
}

impl RunResult {
    /// Text for the output pane: stdout, else stderr, else compile output,
    /// skipping empty strings. `None` when all three are empty or absent.
    pub fn display_output(&self) -> Option<&str> {
        [&self.stdout, &self.stderr, &self.compile_output]
            .into_iter()
            .find_map(|field| non_empty(field.as_deref()))
    }

    pub fn status_description(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| non_empty(s.description.as_deref()))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

/// Judge services report `time` as a string ("0.010") and `memory` as a
/// number. Both are kept verbatim; only `null` or a missing field is absent.
fn raw_measure<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        NumberOrText::Number(n) => n.to_string(),
        NumberOrText::Text(s) => s,
    }))
}
