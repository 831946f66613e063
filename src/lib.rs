//! # gridrover
//!
//! A sovereign simulation core for wheeled rovers moving on a bounded,
//! axis-aligned integer grid, driven by a compact textual command language.
//!
//! It decouples the *command language* (free-form text describing grid bounds,
//! a rover's starting pose, and a movement program) from the *driver*
//! (an interactive prompt, a test harness, a batch runner), producing a
//! [`Report`] of each rover's final position, heading, and whether it drove
//! off the grid.
//!
//! The entry point is [`Session`]: construct it from a grid specification,
//! then [`Session::dispatch`] one rover specification at a time. The lower
//! layers ([`Grid`], [`Rover`]) stay public for drivers that need finer
//! control, such as running one program against different bounds.

pub mod error;
pub mod grid;
pub mod rover;
pub mod session;

pub use error::*;
pub use grid::*;
pub use rover::*;
pub use session::*;
