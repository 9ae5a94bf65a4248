//! Least-cost routing across square trap grids.
//!
//! A [`TrapGen`] scatters traps over an N×N grid, guarantees that the goal
//! corner stays reachable from the start corner, and marks the cells next to
//! traps as dangerous. [`search_layout`] then runs A* from
//! [`trapgrid_paths`] with the grid's cell costs and a [`LogicalFilter`] that
//! refuses traps outright and defers cells surrounded by hazards whenever a
//! safer sibling exists.
//!
//! ```no_run
//! use trapgrid::{GenerationConfig, Session};
//!
//! let mut session = Session::new(&GenerationConfig::default());
//! session.generate(10, 15)?;
//! let found = session.search()?;
//! println!("{} cells, {} explored", found.path.len(), found.stats.explored);
//! # Ok::<(), trapgrid::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod cost;
pub mod error;
pub mod layout;
pub mod mapgen;
pub mod prune;
pub mod render;
pub mod session;

pub use config::{Config, GenerationConfig};
pub use cost::{GridPather, PassablePather, path_cost};
pub use error::{Error, Result};
pub use layout::Layout;
pub use mapgen::{TrapGen, mark_dangerous};
pub use prune::LogicalFilter;
pub use render::render;
pub use session::{Session, search_layout};

pub use trapgrid_core::{Cell, Grid, Point};
pub use trapgrid_paths::{Search, SearchStats};
