//! Terminal presentation for the `airlift` binary.

pub mod blocks;
pub mod ci;
pub mod context;
pub mod error;
pub mod live_region;
pub mod primitives;
pub mod progress;
pub mod prompter;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
