use anyhow::Context;
use backend::server::serve;
use clap::Parser;
use log::info;
use render::render_matrix;
use retrieval::Program;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::{ConfigOverrides, PlannerConfig};
use workflow::runner::Runner;

mod backend;
mod render;
mod retrieval;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Semester degree plan viewer")]
struct Args {
    /// Load planner settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Program code to plan (EE1, CS1, MT1)
    #[arg(long)]
    program: Option<Program>,
    /// Base URL of the plan backend
    #[arg(long)]
    base_url: Option<String>,
    /// Read the raw plan JSON from a file instead of fetching it
    #[arg(long)]
    input: Option<PathBuf>,
    /// Serve plan files from the data directory until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
    #[arg(long)]
    data_dir: Option<PathBuf>,
    #[arg(long)]
    bind: Option<SocketAddr>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base_config = if let Some(path) = &args.config {
        PlannerConfig::load(path)?
    } else {
        PlannerConfig::default()
    };
    let config = base_config.with_overrides(ConfigOverrides {
        base_url: args.base_url,
        program: args.program,
        data_dir: args.data_dir,
        bind: args.bind,
    });

    let runtime = TokioBuilder::new_current_thread()
        .enable_all()
        .build()
        .context("creating runtime")?;

    if args.serve {
        return runtime.block_on(async {
            let shutdown = async {
                if let Err(err) = signal::ctrl_c().await {
                    log::error!("awaiting Ctrl+C failed: {}", err);
                }
            };
            let (addr, server) = serve(config.bind, config.data_dir.clone(), shutdown)?;
            info!(
                "serving plans from {} on http://{} (Ctrl+C to stop)",
                config.data_dir.display(),
                addr
            );
            server.await;
            Ok::<(), anyhow::Error>(())
        });
    }

    let runner = Runner::new(config);
    let report = match &args.input {
        Some(path) => runner.execute_file(path)?,
        None => runtime.block_on(runner.fetch_and_execute())?,
    };
    info!(
        "plan has {} semesters across {} course columns",
        report.plan.semesters().len(),
        report.matrix.column_count()
    );

    print!("{}", render_matrix(&report.matrix));
    Ok(())
}
