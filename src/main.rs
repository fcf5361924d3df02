use anyhow::{Context, Result};
use tc_plot::PlotConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = PlotConfig::default();
    tc_plot::run(&config).with_context(|| {
        format!(
            "generating {} from {}",
            config.output.display(),
            config.input.display()
        )
    })?;

    Ok(())
}
