//! HTTP surface of the inventory service.
//!
//! One JSON endpoint serving the record envelope and one server-rendered
//! page embedding the view component.

mod page;
mod stickers;

pub use page::*;
pub use stickers::*;
