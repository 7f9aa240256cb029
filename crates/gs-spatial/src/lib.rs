//! `gs-spatial` — the moving-shape sweep algorithm and the grid's cell
//! reservation index.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|----------------------------------------------------------|
//! | [`geometry`]   | `moving_shape_overlap_intervals` — the core sweep      |
//! | [`cell_index`] | `CellIndex` — `reserve`/`release`/`iterate`            |
//! | [`error`]      | `SpatialError`, `SpatialResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag        | Effect                                                  |
//! |-------------|------------------------------------------------------------|
//! | `fast-hash` | Uses `FxHashMap` for per-cell reservation storage.      |
//! | `serde`     | Derives `Serialize`/`Deserialize` on public types.      |

pub mod cell_index;
pub mod error;
pub mod geometry;


pub use cell_index::CellIndex;
pub use error::{SpatialError, SpatialResult};
pub use geometry::{moving_shape_overlap_intervals, OverlapIntervals};
