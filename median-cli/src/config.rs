use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Sequences read from a `--input` TOML file.
///
/// ```toml
/// a = [1, 3]
/// b = [2]
/// strategy = "partition"
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputFile {
    #[serde(default)]
    pub a: Vec<i64>,
    #[serde(default)]
    pub b: Vec<i64>,
    #[serde(default)]
    pub strategy: Option<String>,
}

impl InputFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str::<InputFile>(&s)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
