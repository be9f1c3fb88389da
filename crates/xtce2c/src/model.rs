// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory mission-database graph consumed by the layout compiler.
//!
//! The graph is built by an external loader and is read-only to the
//! compiler, except for each container's entry order and packing status,
//! which the bit-order transcoder rewrites in place.

/// A namespace node: the top-level system or one of its subsystems.
#[derive(Debug, Clone)]
pub struct Scope {
    pub name: String,
    pub subsystems: Vec<Scope>,
    pub containers: Vec<Container>,
}

impl Scope {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subsystems: Vec::new(),
            containers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_subsystems(mut self, subsystems: Vec<Scope>) -> Self {
        self.subsystems = subsystems;
        self
    }

    #[must_use]
    pub fn with_containers(mut self, containers: Vec<Container>) -> Self {
        self.containers = containers;
        self
    }
}

/// Packing-order resolution state of a container.
///
/// Replaces the stringly-typed tag bag of earlier tooling: the state is
/// set at construction (`WireOrder` or `NeedsTranscode`) and advanced only
/// by the transcoder. It must never still be `NeedsTranscode` once a
/// transcoding pass has run over the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackingStatus {
    /// Entries are already declared in wire order.
    #[default]
    WireOrder,
    /// Entries are declared in packed in-memory order and must be
    /// rewritten into wire order before struct generation.
    NeedsTranscode,
    /// The transcoder rewrote the entries into wire order.
    Resolved,
    /// The transcoder found a bit-field group crossing a byte boundary;
    /// the container cannot be generated automatically.
    Unresolved,
}

/// An ordered record definition; the unit of struct generation.
#[derive(Debug, Clone)]
pub struct Container {
    pub name: String,
    pub entries: Vec<Entry>,
    pub packing: PackingStatus,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            packing: PackingStatus::WireOrder,
        }
    }

    #[must_use]
    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    #[must_use]
    pub fn with_packing(mut self, packing: PackingStatus) -> Self {
        self.packing = packing;
        self
    }
}

/// One slot within a container.
#[derive(Debug, Clone)]
pub enum Entry {
    Parameter(Parameter),
    FixedValue(FixedValue),
}

/// A constant/marker field of a fixed width.
#[derive(Debug, Clone)]
pub struct FixedValue {
    pub name: String,
    pub bits: u32,
    pub value: u64,
}

/// A named, typed value slot.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParameterType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Closed set of parameter type variants.
#[derive(Debug, Clone)]
pub enum ParameterType {
    Boolean {
        bits: u32,
    },
    Enumerated {
        encoding: IntegerEncoding,
        choices: Vec<Choice>,
    },
    Float {
        bits: u32,
    },
    Integer {
        encoding: IntegerEncoding,
    },
    Aggregate {
        members: Vec<Parameter>,
    },
}

/// Bit width plus representation scheme for an integer-family value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerEncoding {
    pub bits: u32,
    pub scheme: IntegerScheme,
}

impl IntegerEncoding {
    pub fn unsigned(bits: u32) -> Self {
        Self {
            bits,
            scheme: IntegerScheme::Unsigned,
        }
    }

    pub fn twos_complement(bits: u32) -> Self {
        Self {
            bits,
            scheme: IntegerScheme::TwosComplement,
        }
    }

    pub fn is_unsigned(&self) -> bool {
        self.scheme == IntegerScheme::Unsigned
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerScheme {
    Unsigned,
    TwosComplement,
}

/// One enumeration member: explicitly valued, or auto-numbered by
/// declaration order (numbering is left to the emitted C enum).
#[derive(Debug, Clone)]
pub enum Choice {
    Valued(i64, String),
    Named(String),
}

/// Turn a mission-database name into a C identifier.
pub fn c_ident(name: &str) -> String {
    name.replace(' ', "_")
}
