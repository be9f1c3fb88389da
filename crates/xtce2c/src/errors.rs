// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compiler errors.
//!
//! Every variant except I/O wraps an authoring problem in the mission
//! database; all of them abort the run. The one deliberately non-fatal
//! condition (a packed-order layout that would cross a byte boundary) is
//! not an error: the transcoder downgrades the container to
//! [`crate::model::PackingStatus::Unresolved`] and the run continues.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{context}: parameter {parameter}: unsupported encoding ({detail})")]
    UnsupportedEncoding {
        context: String,
        parameter: String,
        detail: String,
    },

    #[error("{context}: parameter {parameter}: {bits}-bit width is not supported ({expected})")]
    UnsupportedWidth {
        context: String,
        parameter: String,
        bits: u32,
        expected: &'static str,
    },

    #[error(
        "container {container} still needs packing-order transcoding; \
         run the transcoder before struct generation"
    )]
    Sequencing { container: String },

    #[error("aggregate {aggregate} contains itself (via {path})")]
    CyclicAggregate { aggregate: String, path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
