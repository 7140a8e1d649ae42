//! Placed occurrences of catalog stops

use serde::{Deserialize, Serialize};

use super::{Stop, StopId};
use crate::identity::InstanceUid;

/// A stop placed inside a group.
///
/// The embedded [`Stop`] is a copy taken at placement time, so the same
/// catalog stop may appear in several groups under different uids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopInstance {
    /// Board-unique identity of this occurrence
    pub uid: InstanceUid,
    /// Snapshot of the catalog stop
    pub stop: Stop,
}

impl StopInstance {
    /// Creates an instance from a uid and a stop snapshot
    #[must_use]
    pub const fn new(uid: InstanceUid, stop: Stop) -> Self {
        Self { uid, stop }
    }

    /// Returns the catalog id this instance was placed from
    #[must_use]
    pub const fn stop_id(&self) -> StopId {
        self.stop.id
    }
}
