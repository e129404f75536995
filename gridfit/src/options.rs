use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, Eq, PartialEq, Display, EnumString,
    ValueEnum,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Placement of an incomplete final row
pub enum LastRowAlignment {
    /// Leave the final row left-aligned, in line with the full rows above it
    #[default]
    Start,
    /// Shift the final row so its tiles sit centered under the full rows
    ///
    /// This is a documented deviation from the default contract: indices in
    /// the final row no longer satisfy `left = col * (tile_width + gap)`.
    Center,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Options for grid layout computation
pub struct GridOptions {
    /// How to place the final row when it holds fewer tiles than there are
    /// columns
    #[serde(default)]
    pub last_row_alignment: LastRowAlignment,
}
