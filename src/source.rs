// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record collection loading.
//!
//! The engine consumes a finite, in-memory collection supplied once. This
//! module is the one place that collection comes from: a JSON array of
//! records, read from a file or stdin. No paging, no retries, no caching.
//! If loading fails the caller gets an error and never runs a query.

use crate::error::{Result, ScoutError};
use crate::types::Record;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Path value meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Parse a JSON array of records from a string.
pub fn parse_records(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of records from any reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    Ok(serde_json::from_reader(BufReader::new(reader))?)
}

/// Load records from a file path, or from stdin when the path is `-`.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let records = if path == Path::new(STDIN_PATH) {
        debug!("reading records from stdin");
        read_records(std::io::stdin().lock()).map_err(|e| e.at_path(path))?
    } else {
        debug!(path = %path.display(), "reading records");
        let file = File::open(path).map_err(|e| ScoutError::from(e).at_path(path))?;
        read_records(file).map_err(|e| e.at_path(path))?
    };

    info!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}
