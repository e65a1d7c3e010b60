//! Data models for the sticker inventory.
//!
//! The record shapes match the wire contract of the data service exactly; the
//! threshold rule is shared by the view component and the service.

mod sticker;
mod threshold;

pub use sticker::*;
pub use threshold::*;
