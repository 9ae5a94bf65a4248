//! Search entry points and the [`Session`] handle that carries a layout
//! from one request to the next.

use rand::rngs::StdRng;
use trapgrid_paths::{PathRange, Search};

use crate::config::GenerationConfig;
use crate::cost::GridPather;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::mapgen::TrapGen;
use crate::prune::LogicalFilter;

/// Run A* with logical pruning from the layout's start to its goal.
///
/// An unreachable goal yields an empty path with the counters still filled
/// in. The result owns all its data; nothing from the search survives it.
pub fn search_layout(layout: &Layout) -> Search {
    let grid = layout.grid();
    let mut pr = PathRange::new(grid.bounds());
    let search = pr.astar_search(
        &GridPather { grid },
        &LogicalFilter::new(grid),
        layout.start(),
        layout.goal(),
    );
    log::debug!(
        "search {} -> {}: path {}, explored {}, pruned {}",
        layout.start(),
        layout.goal(),
        search.stats.path_length,
        search.stats.explored,
        search.stats.pruned
    );
    search
}

/// Caller-owned state between a generate call and later searches.
///
/// Generating replaces the held layout wholesale, and only after the new one
/// is complete; a failed generation leaves the previous layout in place.
/// Searches borrow the session immutably, so they always see one whole
/// layout.
pub struct Session {
    mapgen: TrapGen<StdRng>,
    layout: Option<Layout>,
}

impl Session {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            mapgen: TrapGen::seeded(config.seed, config.max_retries),
            layout: None,
        }
    }

    /// Generate a fresh layout and make it current.
    pub fn generate(&mut self, grid_size: i32, trap_count: usize) -> Result<&Layout> {
        let layout = self.mapgen.generate(grid_size, trap_count)?;
        log::info!("generated {grid_size}x{grid_size} grid with {trap_count} traps");
        let layout: &Layout = self.layout.insert(layout);
        Ok(layout)
    }

    /// The current layout, if any.
    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Search the current layout.
    pub fn search(&self) -> Result<Search> {
        let layout = self
            .layout
            .as_ref()
            .ok_or_else(|| Error::InvalidInput("no grid has been generated yet".into()))?;
        Ok(search_layout(layout))
    }
}
