//! Core data structures for the board
//!
//! - [`Stop`] is a catalog template, identified by [`StopId`]
//! - [`StopInstance`] is a placed occurrence of a stop inside a group
//! - [`StopGroup`] is a named, ordered, collapsible container of instances

mod group;
mod instance;
mod stop;

pub use group::{GroupId, GroupSeed, StopGroup, Visibility};
pub use instance::StopInstance;
pub use stop::{Stop, StopId};
