//! Asset Persistence
//!
//! A dialogue's durable state is exactly its ordered node list; everything
//! else (the id index) is derived. Assets are stored as a pretty-printed
//! JSON array of node records.
//!
//! Loading funnels through [`Dialogue::from_nodes`], which rebuilds the
//! index and seeds a root when the asset is empty.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::graph::{Dialogue, Node};

/// Errors surfaced by the persistence boundary.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the underlying stream failed.
    #[error("dialogue asset io error: {0}")]
    Io(#[from] std::io::Error),

    /// The asset contents are not a valid node list.
    #[error("dialogue asset is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a dialogue's node records to `writer` as pretty-printed JSON.
pub fn save<W: Write>(dialogue: &Dialogue, writer: W) -> Result<(), PersistError> {
    serde_json::to_writer_pretty(writer, dialogue.nodes())?;
    Ok(())
}

/// Read a node list from `reader` and rebuild a dialogue around it.
pub fn load<R: Read>(reader: R) -> Result<Dialogue, PersistError> {
    let nodes: Vec<Node> = serde_json::from_reader(reader)?;
    debug!(nodes = nodes.len(), "loaded dialogue asset");
    Ok(Dialogue::from_nodes(nodes))
}

/// Save a dialogue to a file, creating or truncating it.
pub fn save_file<P: AsRef<Path>>(dialogue: &Dialogue, path: P) -> Result<(), PersistError> {
    let file = File::create(path)?;
    save(dialogue, BufWriter::new(file))
}

/// Load a dialogue from a file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Dialogue, PersistError> {
    let file = File::open(path)?;
    load(BufReader::new(file))
}
