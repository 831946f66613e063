//! Driver-facing session: one validated grid, any number of rovers.

use crate::error::Error;
use crate::grid::Grid;
use crate::rover::{Report, Rover};
use tracing::debug;

/// A single simulation run bound to one validated [`Grid`].
///
/// The session is the seam between the core and whatever drives it (an
/// interactive prompt, a batch file, a test): the driver hands over raw
/// text, the session hands back a [`Report`] or a validation [`Error`].
/// It holds no mutable state, so rovers are fully independent of each
/// other and a failed dispatch leaves the session untouched.
pub struct Session {
    grid: Grid,
}

impl Session {
    /// Parses the grid specification and opens a session on it.
    pub fn new(grid_spec: &str) -> Result<Self, Error> {
        let grid = grid_spec.parse::<Grid>()?;
        debug!(length = grid.length, width = grid.width, "session opened");
        Ok(Self { grid })
    }

    /// The bounds every dispatched rover is validated and driven against.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Builds a rover from `rover_spec`, runs its whole program, and
    /// returns its final state.
    pub fn dispatch(&self, rover_spec: &str) -> Result<Report, Error> {
        let mut rover = Rover::new(rover_spec, &self.grid)?;
        rover.execute_all(&self.grid);
        Ok(rover.report())
    }
}
