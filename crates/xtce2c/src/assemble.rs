// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render one packed struct per container.

use crate::errors::Error;
use crate::model::{c_ident, Container, PackingStatus};
use crate::registry::{HeaderUnit, INDENT};
use crate::resolve::resolve_entry;

/// Append the struct definition for `container` to the unit.
///
/// Containers with no entries produce no output. A container still
/// marked [`PackingStatus::NeedsTranscode`] means the transcoding pass
/// never ran over it, which is a pipeline ordering bug, not an authoring
/// problem. An [`PackingStatus::Unresolved`] container gets an empty
/// struct shell with a placeholder comment so the gap is visible in the
/// generated header; its status is consumed in the process.
pub fn assemble_container(
    scope: &str,
    container: &mut Container,
    unit: &mut HeaderUnit,
) -> Result<(), Error> {
    if container.entries.is_empty() {
        return Ok(());
    }

    let struct_name = format!("{}_container", c_ident(&container.name));
    let mut text = format!("struct __attribute__ ((__packed__)) {struct_name} {{\n");

    match container.packing {
        PackingStatus::NeedsTranscode => {
            return Err(Error::Sequencing {
                container: container.name.clone(),
            })
        }
        PackingStatus::Unresolved => {
            text.push_str(&format!(
                "{INDENT}// Field order crosses a byte boundary; resolve manually.\n"
            ));
            container.packing = PackingStatus::WireOrder;
        }
        PackingStatus::WireOrder | PackingStatus::Resolved => {
            for entry in &container.entries {
                text.push_str(&resolve_entry(scope, entry, unit)?);
            }
        }
    }

    text.push_str("};\n\n");
    unit.push_struct(&text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Entry, IntegerEncoding, Parameter, ParameterType};

    fn integer(name: &str, bits: u32) -> Entry {
        Entry::Parameter(Parameter::new(
            name,
            ParameterType::Integer {
                encoding: IntegerEncoding::unsigned(bits),
            },
        ))
    }

    #[test]
    fn test_empty_container_produces_no_output() {
        let mut unit = HeaderUnit::new("Power");
        let mut container = Container::new("Empty");
        assemble_container("Power", &mut container, &mut unit).unwrap();
        assert!(!unit.render().contains("Empty_container"));
    }

    #[test]
    fn test_members_render_in_declared_order() {
        let mut unit = HeaderUnit::new("Power");
        let mut container =
            Container::new("Status").with_entries(vec![integer("Voltage", 16), integer("Mode", 8)]);
        assemble_container("Power", &mut container, &mut unit).unwrap();
        let rendered = unit.render();
        assert!(rendered.contains(
            "struct __attribute__ ((__packed__)) Status_container {\n    uint16_t Voltage;\n    uint8_t Mode;\n};\n"
        ));
    }

    #[test]
    fn test_pending_transcode_is_a_sequencing_error() {
        let mut unit = HeaderUnit::new("Power");
        let mut container = Container::new("Status")
            .with_entries(vec![integer("A", 4)])
            .with_packing(PackingStatus::NeedsTranscode);
        let err = assemble_container("Power", &mut container, &mut unit).unwrap_err();
        assert!(matches!(err, Error::Sequencing { .. }));
    }

    #[test]
    fn test_unresolved_container_gets_placeholder_shell() {
        let mut unit = HeaderUnit::new("Power");
        let mut container = Container::new("Status")
            .with_entries(vec![integer("A", 4), integer("B", 4), integer("C", 4)])
            .with_packing(PackingStatus::Unresolved);
        assemble_container("Power", &mut container, &mut unit).unwrap();
        let rendered = unit.render();
        assert!(rendered.contains("struct __attribute__ ((__packed__)) Status_container {"));
        assert!(rendered.contains("// Field order crosses a byte boundary; resolve manually."));
        assert!(!rendered.contains("uint8_t A"));
        // Status consumed.
        assert_eq!(container.packing, PackingStatus::WireOrder);
    }

    #[test]
    fn test_container_name_spaces_are_replaced() {
        let mut unit = HeaderUnit::new("Power");
        let mut container =
            Container::new("Battery Status").with_entries(vec![integer("Level", 8)]);
        assemble_container("Power", &mut container, &mut unit).unwrap();
        assert!(unit.render().contains("Battery_Status_container"));
    }
}
