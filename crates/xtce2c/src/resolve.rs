// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map one container entry to one struct-member declaration.
//!
//! The match over [`ParameterType`] is exhaustive, so a new parameter
//! variant cannot be silently dropped: it fails to compile until this
//! module learns about it. Encodings that earlier tooling rejected at
//! runtime (a non-integer encoding behind an enumeration, an unknown
//! integer scheme) are unrepresentable in the model and need no check
//! here.

use crate::errors::Error;
use crate::model::{c_ident, Entry, FixedValue, Parameter, ParameterType};
use crate::registry::{render_enum, HeaderUnit, INDENT};

/// Render the declaration line for one entry, registering any named
/// global type (enumeration, aggregate) it references in `unit`.
pub fn resolve_entry(
    scope: &str,
    entry: &Entry,
    unit: &mut HeaderUnit,
) -> Result<String, Error> {
    match entry {
        Entry::Parameter(parameter) => {
            let mut visiting = Vec::new();
            resolve_parameter(scope, parameter, unit, &mut visiting)
        }
        Entry::FixedValue(fixed) => resolve_fixed_value(scope, fixed),
    }
}

fn resolve_parameter(
    scope: &str,
    parameter: &Parameter,
    unit: &mut HeaderUnit,
    visiting: &mut Vec<String>,
) -> Result<String, Error> {
    let name = c_ident(&parameter.name);
    match &parameter.kind {
        ParameterType::Boolean { bits } => {
            // uint8_t rather than bool keeps the stored width explicit.
            let bit_field = bit_field_suffix(*bits);
            Ok(format!("{INDENT}uint8_t {name}{bit_field};\n"))
        }
        ParameterType::Enumerated { encoding, choices } => {
            let bit_field = bit_field_suffix(encoding.bits);
            if !unit.contains_global(&name) {
                let rendered = render_enum(&name, choices);
                unit.define_global(&name, &rendered);
            }
            Ok(format!("{INDENT}{name}::type m{name}{bit_field};\n"))
        }
        ParameterType::Float { bits } => {
            let type_str = match bits {
                32 => "float",
                64 => "double",
                _ => {
                    return Err(Error::UnsupportedWidth {
                        context: scope.to_string(),
                        parameter: parameter.name.clone(),
                        bits: *bits,
                        expected: "floats must be 32 or 64 bits",
                    })
                }
            };
            Ok(format!("{INDENT}{type_str} {name};\n"))
        }
        ParameterType::Integer { encoding } => {
            let (type_str, bit_field) = integer_storage(
                scope,
                &parameter.name,
                encoding.bits,
                encoding.is_unsigned(),
            )?;
            Ok(format!("{INDENT}{type_str} {name}{bit_field};\n"))
        }
        ParameterType::Aggregate { members } => {
            resolve_aggregate(scope, parameter, members, unit, visiting)
        }
    }
}

/// Emit a nested composite type once per distinct name per unit and
/// reference it by value. An aggregate containing itself, directly or
/// through another aggregate, is fatal.
fn resolve_aggregate(
    scope: &str,
    parameter: &Parameter,
    members: &[Parameter],
    unit: &mut HeaderUnit,
    visiting: &mut Vec<String>,
) -> Result<String, Error> {
    let name = c_ident(&parameter.name);
    if visiting.iter().any(|seen| *seen == parameter.name) {
        return Err(Error::CyclicAggregate {
            aggregate: parameter.name.clone(),
            path: visiting.join(" -> "),
        });
    }
    if !unit.contains_global(&name) {
        visiting.push(parameter.name.clone());
        let mut body = String::new();
        for member in members {
            body.push_str(&resolve_parameter(scope, member, unit, visiting)?);
        }
        visiting.pop();
        // Member types were registered first, so they precede this one
        // in the unit's global section.
        let rendered = format!("struct {name} {{\n{body}}};\n\n");
        unit.define_global(&name, &rendered);
    }
    Ok(format!("{INDENT}{name} m{name};\n"))
}

/// A fixed/marker entry becomes a reserved unsigned field of its width.
fn resolve_fixed_value(scope: &str, fixed: &FixedValue) -> Result<String, Error> {
    let name = c_ident(&fixed.name);
    let (type_str, bit_field) = integer_storage(scope, &fixed.name, fixed.bits, true)?;
    Ok(format!(
        "{INDENT}{type_str} {name}{bit_field}; // fixed value 0x{:X}\n",
        fixed.value
    ))
}

fn bit_field_suffix(bits: u32) -> String {
    if bits < 8 {
        format!(" : {bits}")
    } else {
        String::new()
    }
}

/// Widths under 8 become a bit-field on an 8-bit storage unit; widths of
/// 8 and above must match an exact-width C integer type.
fn integer_storage(
    scope: &str,
    parameter: &str,
    bits: u32,
    unsigned: bool,
) -> Result<(String, String), Error> {
    let sign_prefix = if unsigned { "u" } else { "" };
    if bits < 8 {
        return Ok((format!("{sign_prefix}int8_t"), format!(" : {bits}")));
    }
    match bits {
        8 | 16 | 32 | 64 => Ok((format!("{sign_prefix}int{bits}_t"), String::new())),
        _ => Err(Error::UnsupportedWidth {
            context: scope.to_string(),
            parameter: parameter.to_string(),
            bits,
            expected: "integer widths of 8 and above must be 8, 16, 32 or 64",
        }),
    }
}
