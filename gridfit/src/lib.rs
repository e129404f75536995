#![warn(clippy::all)]
#![allow(clippy::missing_errors_doc, clippy::use_self, clippy::doc_markdown)]

//! Tile grid layout solver.
//!
//! This crate computes, for a rectangular container and a requested number of
//! equally-shaped tiles, the row/column partition that maximizes each tile's
//! area while preserving a target aspect ratio and a uniform inter-tile gap,
//! and maps tile indices to pixel positions. The classic video-conferencing
//! grid problem.

pub mod aspect_ratio;
pub mod error;
pub mod grid;
pub mod options;
pub mod rect;

pub use aspect_ratio::*;
pub use error::*;
pub use grid::*;
pub use options::*;
pub use rect::*;
