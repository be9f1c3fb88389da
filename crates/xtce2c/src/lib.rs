// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compile a telemetry/command mission database into packed C container
//! definitions.
//!
//! The input is an in-memory graph of scopes, containers and typed
//! parameters (built elsewhere, e.g. by the `xtce2c-gen` YAML loader).
//! The output is one self-contained C header per subsystem, holding one
//! `__attribute__ ((__packed__))` struct per container plus any scoped
//! enumeration and aggregate types those structs reference.
//!
//! # Pipeline
//!
//! - [`reorder::transcode_scope`] rewrites containers authored in packed
//!   in-memory order into wire order, or marks them unresolved when a
//!   bit-field group would cross a byte boundary.
//! - [`assemble::assemble_container`] renders one struct per container,
//!   delegating each member to [`resolve::resolve_entry`].
//! - [`emit::generate_headers`] groups everything per subsystem into a
//!   guarded header and hands it to a [`HeaderSink`].

pub mod assemble;
pub mod emit;
pub mod errors;
pub mod model;
pub mod registry;
pub mod reorder;
pub mod resolve;

pub use emit::{generate_headers, DirSink, HeaderSink};
pub use errors::Error;
pub use model::{
    Choice, Container, Entry, FixedValue, IntegerEncoding, IntegerScheme, PackingStatus,
    Parameter, ParameterType, Scope,
};
pub use registry::HeaderUnit;
pub use reorder::{transcode_container, transcode_scope};
