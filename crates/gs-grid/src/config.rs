//! Fluent builder for constructing a [`Grid`].

use crate::{Grid, GridObserver, NoopObserver};

/// Fluent builder for [`Grid`].
///
/// Equivalent to calling [`Grid::new`] directly; this exists for callers who
/// want to assemble the configuration before construction, following this
/// workspace's builder convention elsewhere (consuming `self`, a final
/// `.build()`).
///
/// # Example
///
/// ```rust,ignore
/// let mut grid = GridConfig::new("warehouse")
///     .x_size(40)
///     .y_size(40)
///     .max_time(500.0)
///     .add_exterior_walls(true)
///     .build();
/// ```
pub struct GridConfig {
    name: String,
    x_size: u32,
    y_size: u32,
    max_time: f64,
    add_exterior_walls: bool,
}

impl GridConfig {
    /// Start a config with every size defaulted to `0`, `max_time` to
    /// `1000.0`, and no exterior walls.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), x_size: 0, y_size: 0, max_time: 1000.0, add_exterior_walls: false }
    }

    pub fn x_size(mut self, x_size: u32) -> Self {
        self.x_size = x_size;
        self
    }

    pub fn y_size(mut self, y_size: u32) -> Self {
        self.y_size = y_size;
        self
    }

    pub fn max_time(mut self, max_time: f64) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn add_exterior_walls(mut self, add_exterior_walls: bool) -> Self {
        self.add_exterior_walls = add_exterior_walls;
        self
    }

    /// Build a [`Grid`] with a [`NoopObserver`].
    pub fn build(self) -> Grid<NoopObserver> {
        self.build_with_observer(NoopObserver)
    }

    /// Build a [`Grid`] instrumented with `observer`.
    pub fn build_with_observer<O: GridObserver>(self, observer: O) -> Grid<O> {
        let mut grid = Grid::with_observer(self.name, self.x_size, self.y_size, self.max_time, observer);
        if self.add_exterior_walls {
            grid.add_exterior_walls();
        }
        grid
    }
}
