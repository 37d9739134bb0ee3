//! Read-only RON dumps of a network for offline inspection.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ron::ser::{to_string_pretty, to_writer_pretty, PrettyConfig};
use serde::Serialize;

use crate::network::error::NetworkError;
use crate::network::graph::{MemberId, SocialNetwork};

pub fn snapshot_string<M>(network: &SocialNetwork<M>) -> Result<String, NetworkError>
where
    M: MemberId + Serialize,
{
    Ok(to_string_pretty(network, PrettyConfig::default())?)
}

/// Writes `network` to `path`, replacing any existing file.
pub fn write_snapshot<M>(path: impl AsRef<Path>, network: &SocialNetwork<M>) -> Result<(), NetworkError>
where
    M: MemberId + Serialize,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer_pretty(&mut writer, network, PrettyConfig::default())?;
    writer.flush()?;

    tracing::info!(path = %path.display(), members = network.len(), "wrote network snapshot");
    Ok(())
}
