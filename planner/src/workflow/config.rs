use crate::retrieval::Program;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlannerConfig {
    pub base_url: String,
    pub program: Program,
    pub allow_unavailable: bool,
    pub data_dir: PathBuf,
    pub bind: SocketAddr,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            program: Program::Ee1,
            allow_unavailable: false,
            data_dir: PathBuf::from("data"),
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub program: Option<Program>,
    pub data_dir: Option<PathBuf>,
    pub bind: Option<SocketAddr>,
}

impl PlannerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading planner config {}", path_ref.display()))?;
        let config: PlannerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing planner config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(base_url) = overrides.base_url {
            self.base_url = base_url;
        }
        if let Some(program) = overrides.program {
            self.program = program;
        }
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        self
    }

    /// The configured program, refused while the backend does not publish it yet.
    pub fn selected_program(&self) -> anyhow::Result<Program> {
        if !self.program.is_available() && !self.allow_unavailable {
            bail!("{} is not yet available", self.program.label());
        }
        Ok(self.program)
    }
}
