use miette::Result;
use tracing::{debug, info};

use crate::grid::{Cell, Grid};
use crate::solver::{find_longest_chain, is_valid_chain};

/// Supplies one fresh grid snapshot per cycle. `Ok(None)` means the game is
/// over and the session should stop. A source that needs to wait for board
/// animations does so inside `capture`; the driver never sleeps.
pub trait GridSource {
    fn capture(&mut self) -> Result<Option<Grid>>;
}

/// Replays a winning chain against the real board, e.g. as a press-move-
/// release pointer gesture. Only ever receives chains satisfying
/// [`is_valid_chain`], and never an empty one.
pub trait ChainExecutor {
    fn execute(&mut self, grid: &Grid, chain: &[Cell]) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub cycles: usize,
    pub chains_executed: usize,
    pub cells_cleared: usize,
}

/// Drives capture → solve → execute until the source reports the game is
/// over. A cycle with no viable chain executes nothing; whether to wait and
/// recapture is the source's policy.
pub fn run_session<S, E>(source: &mut S, executor: &mut E) -> Result<SessionStats>
where
    S: GridSource + ?Sized,
    E: ChainExecutor + ?Sized,
{
    let mut stats = SessionStats::default();

    while let Some(grid) = source.capture()? {
        stats.cycles += 1;

        let chain = find_longest_chain(&grid);
        if chain.is_empty() {
            debug!(cycle = stats.cycles, "no viable chain this cycle");
            continue;
        }

        debug_assert!(is_valid_chain(&grid, &chain));
        executor.execute(&grid, &chain)?;
        stats.chains_executed += 1;
        stats.cells_cleared += chain.len();
    }

    info!(
        cycles = stats.cycles,
        chains = stats.chains_executed,
        cells = stats.cells_cleared,
        "session finished"
    );
    Ok(stats)
}
