// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deserialize a YAML mission-database description into the in-memory
//! graph the compiler consumes.
//!
//! The document mirrors the model one-to-one; conversion keeps the core
//! library serde-free. Containers may declare `packed_order: true` to
//! enter the pipeline needing bit-order transcoding.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use xtce2c::{
    Choice, Container, Entry, FixedValue, IntegerEncoding, PackingStatus, Parameter,
    ParameterType, Scope,
};

#[derive(Debug, Deserialize)]
pub struct ScopeDoc {
    pub name: String,
    #[serde(default)]
    pub subsystems: Vec<ScopeDoc>,
    #[serde(default)]
    pub containers: Vec<ContainerDoc>,
}

#[derive(Debug, Deserialize)]
pub struct ContainerDoc {
    pub name: String,
    #[serde(default)]
    pub packed_order: bool,
    #[serde(default)]
    pub entries: Vec<EntryDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntryDoc {
    Boolean {
        name: String,
        bits: u32,
    },
    Enumerated {
        name: String,
        bits: u32,
        #[serde(default)]
        signed: bool,
        choices: Vec<ChoiceDoc>,
    },
    Float {
        name: String,
        bits: u32,
    },
    Integer {
        name: String,
        bits: u32,
        #[serde(default)]
        signed: bool,
    },
    Aggregate {
        name: String,
        members: Vec<EntryDoc>,
    },
    FixedValue {
        name: String,
        bits: u32,
        #[serde(default)]
        value: u64,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ChoiceDoc {
    Valued { value: i64, name: String },
    Named(String),
}

/// Load and convert a mission-database file.
pub fn load_model(path: &Path) -> Result<Scope> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let doc: ScopeDoc = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    scope_from_doc(doc)
}

fn scope_from_doc(doc: ScopeDoc) -> Result<Scope> {
    let subsystems = doc
        .subsystems
        .into_iter()
        .map(scope_from_doc)
        .collect::<Result<Vec<_>>>()?;
    let containers = doc
        .containers
        .into_iter()
        .map(container_from_doc)
        .collect::<Result<Vec<_>>>()?;
    Ok(Scope::new(doc.name)
        .with_subsystems(subsystems)
        .with_containers(containers))
}

fn container_from_doc(doc: ContainerDoc) -> Result<Container> {
    let packing = if doc.packed_order {
        PackingStatus::NeedsTranscode
    } else {
        PackingStatus::WireOrder
    };
    let entries = doc
        .entries
        .into_iter()
        .map(|entry| entry_from_doc(&doc.name, entry))
        .collect::<Result<Vec<_>>>()?;
    Ok(Container::new(doc.name)
        .with_entries(entries)
        .with_packing(packing))
}

fn entry_from_doc(container: &str, doc: EntryDoc) -> Result<Entry> {
    Ok(match doc {
        EntryDoc::FixedValue { name, bits, value } => {
            Entry::FixedValue(FixedValue { name, bits, value })
        }
        other => Entry::Parameter(parameter_from_doc(container, other)?),
    })
}

fn parameter_from_doc(container: &str, doc: EntryDoc) -> Result<Parameter> {
    Ok(match doc {
        EntryDoc::Boolean { name, bits } => {
            Parameter::new(name, ParameterType::Boolean { bits })
        }
        EntryDoc::Enumerated {
            name,
            bits,
            signed,
            choices,
        } => Parameter::new(
            name,
            ParameterType::Enumerated {
                encoding: encoding(bits, signed),
                choices: choices.into_iter().map(choice_from_doc).collect(),
            },
        ),
        EntryDoc::Float { name, bits } => Parameter::new(name, ParameterType::Float { bits }),
        EntryDoc::Integer { name, bits, signed } => Parameter::new(
            name,
            ParameterType::Integer {
                encoding: encoding(bits, signed),
            },
        ),
        EntryDoc::Aggregate { name, members } => {
            let members = members
                .into_iter()
                .map(|member| parameter_from_doc(container, member))
                .collect::<Result<Vec<_>>>()?;
            Parameter::new(name, ParameterType::Aggregate { members })
        }
        EntryDoc::FixedValue { name, .. } => {
            bail!("container {container}: fixed value {name} cannot be an aggregate member")
        }
    })
}

fn encoding(bits: u32, signed: bool) -> IntegerEncoding {
    if signed {
        IntegerEncoding::twos_complement(bits)
    } else {
        IntegerEncoding::unsigned(bits)
    }
}

fn choice_from_doc(doc: ChoiceDoc) -> Choice {
    match doc {
        ChoiceDoc::Valued { value, name } => Choice::Valued(value, name),
        ChoiceDoc::Named(name) => Choice::Named(name),
    }
}
