use crate::retrieval::{PlanClient, Program, RETRIEVAL_FAILURE_MESSAGE};
use crate::workflow::config::PlannerConfig;
use anyhow::{anyhow, Context};
use degreeplan::{DegreePlan, Matrix, MatrixBuilder, Normalizer};
use log::{error, info};
use std::fs;
use std::path::Path;

pub struct PlanReport {
    pub plan: DegreePlan,
    pub matrix: Matrix,
}

#[derive(Clone)]
pub struct Runner {
    config: PlannerConfig,
    client: PlanClient,
}

impl Runner {
    pub fn new(config: PlannerConfig) -> Self {
        let client = PlanClient::new(config.base_url.clone());
        Self { config, client }
    }

    /// Shapes a raw plan given as JSON bytes.
    pub fn execute(&self, raw: &[u8]) -> anyhow::Result<PlanReport> {
        let plan = Normalizer::from_slice(raw).context("normalizing degree plan")?;
        let matrix = MatrixBuilder::build(&plan);
        Ok(PlanReport { plan, matrix })
    }

    pub fn execute_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<PlanReport> {
        let path_ref = path.as_ref();
        let raw = fs::read(path_ref)
            .with_context(|| format!("reading raw plan {}", path_ref.display()))?;
        self.execute(&raw)
            .with_context(|| format!("shaping raw plan {}", path_ref.display()))
    }

    /// Fetches the plan once; any retrieval problem surfaces as the generic message.
    pub async fn fetch(&self, program: Program) -> anyhow::Result<Vec<u8>> {
        info!("fetching {} from {}", program.label(), self.client.plan_url(program));
        self.client.fetch(program).await.map_err(|err| {
            error!("plan retrieval failed: {}", err);
            anyhow!(RETRIEVAL_FAILURE_MESSAGE)
        })
    }

    pub async fn fetch_and_execute(&self) -> anyhow::Result<PlanReport> {
        let program = self.config.selected_program()?;
        let raw = self.fetch(program).await?;
        self.execute(&raw)
    }
}
