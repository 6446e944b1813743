use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::world::SimulationWorld;
use crate::error::SimError;
use crate::flush::flush_to_jsonl;

/// Options for a bounded run with optional checkpoints.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub ticks: u64,
    /// If set, export world state every N ticks.
    pub flush_interval: Option<u64>,
    /// Directory to write checkpoints into.
    pub output_dir: Option<PathBuf>,
}

impl RunOptions {
    pub fn new(ticks: u64) -> Self {
        Self {
            ticks,
            ..Self::default()
        }
    }

    pub fn with_checkpoints(mut self, interval: u64, output_dir: impl Into<PathBuf>) -> Self {
        self.flush_interval = Some(interval);
        self.output_dir = Some(output_dir.into());
        self
    }

    /// Whether a checkpoint is due after `ticks_done` ticks of this run.
    fn checkpoint_due(&self, ticks_done: u64) -> bool {
        match self.flush_interval {
            Some(interval) if self.output_dir.is_some() => {
                ticks_done == self.ticks || (interval > 0 && ticks_done % interval == 0)
            }
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("failed to write checkpoint {path}: {source}")]
    Flush {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Step `world` for `options.ticks` ticks.
///
/// Checkpoints land in `output_dir/tick_NNNNNN/` every `flush_interval` ticks
/// and after the final tick. The directory name uses the world's tick count,
/// so resuming a world keeps numbering monotonic.
pub fn run_with_options(world: &mut SimulationWorld, options: &RunOptions) -> Result<(), RunError> {
    for ticks_done in 1..=options.ticks {
        world.step()?;

        if !options.checkpoint_due(ticks_done) {
            continue;
        }
        if let Some(dir) = &options.output_dir {
            let tick = world.tick();
            let checkpoint_dir = dir.join(format!("tick_{tick:06}"));
            flush_to_jsonl(world, &checkpoint_dir).map_err(|source| RunError::Flush {
                path: checkpoint_dir.clone(),
                source,
            })?;
            tracing::debug!(path = %checkpoint_dir.display(), "checkpoint written");
        }
    }

    tracing::info!(ticks = options.ticks, tick = world.tick(), "run finished");
    Ok(())
}
