use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    /// A query referenced a member that was never added to the network.
    #[error("member {0} is not part of the network")]
    MemberNotFound(String),
    #[error("cannot generate member names from an empty name list")]
    EmptyNamePool,
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization failed: {0}")]
    Snapshot(#[from] ron::Error),
}
