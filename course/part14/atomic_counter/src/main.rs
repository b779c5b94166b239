use atomic_counter::{config::RunConfig, tracing_init};

fn main() -> anyhow::Result<()> {
    tracing_init::init()?;

    let config = RunConfig::load()?;
    let _ = atomic_counter::run(&config)?;

    Ok(())
}
