// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rewrite containers authored in packed in-memory order into wire order.
//!
//! Within a packed C struct the most recently declared bit-field ends up
//! in the low-order position of its storage byte, so a container written
//! down in struct-declaration order arrives over the wire with each byte's
//! fields reversed. This pass reverses them back, one storage unit at a
//! time, and refuses any arrangement where a multi-field group would
//! straddle a byte boundary (such a layout has no packed-struct
//! equivalent).

use crate::errors::Error;
use crate::model::{Container, Entry, PackingStatus, ParameterType, Scope};

/// Transcode every container of the root scope and of its direct
/// subsystems. Containers not marked [`PackingStatus::NeedsTranscode`]
/// are left untouched.
pub fn transcode_scope(root: &mut Scope) -> Result<(), Error> {
    for container in &mut root.containers {
        transcode_container(container)?;
    }
    for subsystem in &mut root.subsystems {
        for container in &mut subsystem.containers {
            transcode_container(container)?;
        }
    }
    Ok(())
}

/// Rewrite one container's entries into wire order, in place.
///
/// On success the status becomes [`PackingStatus::Resolved`]. If a
/// bit-field group crosses a byte boundary the container keeps its
/// original entry order and is downgraded to
/// [`PackingStatus::Unresolved`]; this is the one non-fatal diagnostic in
/// the compiler, since other containers may still generate cleanly.
pub fn transcode_container(container: &mut Container) -> Result<(), Error> {
    if container.packing != PackingStatus::NeedsTranscode {
        return Ok(());
    }

    let mut reordered: Vec<Entry> = Vec::with_capacity(container.entries.len());
    // Fields of the byte being accumulated, newest first.
    let mut pending: Vec<Entry> = Vec::new();
    let mut bit_count: u32 = 0;

    for entry in &container.entries {
        let bits = match entry {
            Entry::Parameter(parameter) => match &parameter.kind {
                ParameterType::Integer { encoding } => encoding.bits,
                _ => {
                    return Err(Error::UnsupportedEncoding {
                        context: format!("container {}", container.name),
                        parameter: parameter.name.clone(),
                        detail: "packed-order transcoding is only defined for integer fields"
                            .to_string(),
                    })
                }
            },
            Entry::FixedValue(fixed) => {
                return Err(Error::UnsupportedEncoding {
                    context: format!("container {}", container.name),
                    parameter: fixed.name.clone(),
                    detail: "packed-order transcoding is only defined for parameter entries"
                        .to_string(),
                })
            }
        };

        bit_count += bits;
        pending.insert(0, entry.clone());

        // A single field that is itself a whole number of bytes closes
        // its own group; only multi-field groups can cross a boundary.
        if bit_count > 8 && pending.len() > 1 {
            log::warn!(
                "container {}: bit-field group crosses a byte boundary, marking unresolved",
                container.name
            );
            container.packing = PackingStatus::Unresolved;
            return Ok(());
        }
        if bit_count % 8 == 0 {
            reordered.append(&mut pending);
            bit_count = 0;
        }
    }

    // Trailing group short of a full byte: kept as-is, no padding is
    // synthesized (the resulting trailing bit-field stays narrower than
    // its storage unit).
    if bit_count > 0 {
        log::debug!(
            "container {}: trailing {}-bit group left unpadded",
            container.name,
            bit_count
        );
        reordered.append(&mut pending);
    }

    container.entries = reordered;
    container.packing = PackingStatus::Resolved;
    Ok(())
}
