use serde::{Deserialize, Serialize};

/// A patch record created on the remote service.
///
/// Once created it exists independently of whether its artifact was
/// uploaded or whether it was ever promoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patch {
    pub id: String,
    /// Per-release sequence number assigned by the service.
    pub number: u32,
    pub release_id: String,
}
