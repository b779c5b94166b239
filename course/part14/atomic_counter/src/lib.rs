use tracing::{debug, instrument, trace};

pub mod config;
pub mod counter;
pub mod tracing_init;

use crate::{config::RunConfig, counter::Counter};

pub const START: u32 = 0;
pub const STEP: u32 = 1;
pub const ITERATIONS: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RunError {
    #[error("{iterations} increments of {step} from {start} do not fit in a u32")]
    Overflow {
        start: u32,
        step: u32,
        iterations: usize,
    },
}

/// Increments a fresh counter `iterations` times and returns where it ended up.
#[instrument(level = "debug")]
pub fn run(config: &RunConfig) -> Result<u32, RunError> {
    let &RunConfig {
        start,
        step,
        iterations,
    } = config;

    let total = u64::try_from(iterations)
        .ok()
        .and_then(|n| n.checked_mul(u64::from(step)))
        .and_then(|n| n.checked_add(u64::from(start)));
    if !matches!(total, Some(t) if t <= u64::from(u32::MAX)) {
        return Err(RunError::Overflow {
            start,
            step,
            iterations,
        });
    }

    if step == 0 {
        debug!(value = start, "zero step, counter cannot move");
        return Ok(start);
    }

    let counter = Counter::new(start);
    for idx in 0..iterations {
        let value = counter.increment(step);
        trace!(idx, value, "incremented");
    }

    let value = counter.into_inner();
    debug!(value, "finished");
    Ok(value)
}
