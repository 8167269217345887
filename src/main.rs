use anyhow::{Context, Result};
use contribmap::{config, run};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) read, drop, map, write ───────────────────────────────────
    let summary = run().with_context(|| {
        format!(
            "enriching {} → {}",
            config::INPUT_PATH,
            config::OUTPUT_PATH
        )
    })?;

    info!(rows = summary.rows, "all done");
    Ok(())
}
