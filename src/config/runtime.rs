//! Runtime-overridable engine settings, loadable from a JSON file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{AxisConfig, TooltipConfig, TrendConfig};
use crate::domain::CalendarMode;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub trend: TrendConfig,
    pub axis: AxisConfig,
    pub tooltip: TooltipConfig,
    pub calendar: CalendarMode,
    /// Cap applied after consolidation when the request does not carry its own.
    pub max_spans: Option<usize>,
}

impl EngineConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }
}
