// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group generated structs into one header per subsystem and write them
//! out.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::assemble::assemble_container;
use crate::errors::Error;
use crate::model::Scope;
use crate::registry::HeaderUnit;

/// Destination for finished translation units.
pub trait HeaderSink {
    fn write_unit(&mut self, filename: &str, contents: &str) -> io::Result<()>;
}

/// Writes each unit as a file in a destination directory.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl HeaderSink for DirSink {
    fn write_unit(&mut self, filename: &str, contents: &str) -> io::Result<()> {
        fs::write(self.dir.join(filename), contents)
    }
}

/// Generate one header per direct subsystem of `root` (the root scope
/// itself is never emitted). Containers are assembled in declared order;
/// each subsystem gets a fresh [`HeaderUnit`], so nothing is shared
/// across output units.
pub fn generate_headers(root: &mut Scope, sink: &mut dyn HeaderSink) -> Result<(), Error> {
    for subsystem in &mut root.subsystems {
        log::info!("generating container definitions for {}", subsystem.name);
        let mut unit = HeaderUnit::new(&subsystem.name);
        for container in &mut subsystem.containers {
            assemble_container(&subsystem.name, container, &mut unit)?;
        }
        sink.write_unit(unit.filename(), &unit.render())?;
    }
    Ok(())
}
