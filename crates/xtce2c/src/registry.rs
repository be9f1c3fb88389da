// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-header accumulation of global types and struct definitions.
//!
//! One [`HeaderUnit`] exists per emitted header (per subsystem). It owns
//! the deduplication list for named global types, so concurrent
//! processing of sibling subsystems would need no shared state.

use crate::model::{c_ident, Choice};

pub(crate) const INDENT: &str = "    ";

/// Build-time representation of one output header.
pub struct HeaderUnit {
    filename: String,
    includes: String,
    globals_emitted: Vec<String>,
    globals: String,
    structs: String,
}

impl HeaderUnit {
    pub fn new(scope_name: &str) -> Self {
        Self {
            filename: format!("{}_containerdef.h", c_ident(scope_name)),
            includes: "#include <stdint.h>\n\n".to_string(),
            globals_emitted: Vec::new(),
            globals: String::new(),
            structs: String::new(),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// True if a global type of this name was already emitted in this unit.
    pub fn contains_global(&self, name: &str) -> bool {
        self.globals_emitted.iter().any(|g| g == name)
    }

    /// Append a named global type definition, unless one of the same name
    /// was already emitted. Returns whether the definition was appended.
    ///
    /// Conflicting redefinitions (same name, different members) are not
    /// detected; the first definition wins within the unit.
    pub fn define_global(&mut self, name: &str, rendered: &str) -> bool {
        if self.contains_global(name) {
            return false;
        }
        self.globals_emitted.push(name.to_string());
        self.globals.push_str(rendered);
        true
    }

    pub fn push_struct(&mut self, rendered: &str) {
        self.structs.push_str(rendered);
    }

    /// Serialize the unit: include guard, includes, global types in
    /// first-seen order, structs in container order.
    pub fn render(&self) -> String {
        let guard = format!("{}_", self.filename.to_uppercase().replace('.', "_"));
        format!(
            "#ifndef {guard}\n#define {guard}\n\n{}{}{}#endif // {guard}\n",
            self.includes, self.globals, self.structs
        )
    }
}

/// Render a scoped enumeration as a standalone named integer-domain type.
///
/// Explicitly valued choices keep their value; bare choices are left to
/// the C enum's own auto-numbering, in declaration order.
pub fn render_enum(name: &str, choices: &[Choice]) -> String {
    let mut out = format!("namespace {name} {{\n{INDENT}enum type {{\n");
    for choice in choices {
        match choice {
            Choice::Valued(value, label) => {
                out.push_str(&format!("{INDENT}{INDENT}{} = {value},\n", c_ident(label)));
            }
            Choice::Named(label) => {
                out.push_str(&format!("{INDENT}{INDENT}{},\n", c_ident(label)));
            }
        }
    }
    out.push_str(&format!("{INDENT}}};\n}}\n\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_token_from_filename() {
        let unit = HeaderUnit::new("Power Subsystem");
        assert_eq!(unit.filename(), "Power_Subsystem_containerdef.h");
        let rendered = unit.render();
        assert!(rendered.starts_with("#ifndef POWER_SUBSYSTEM_CONTAINERDEF_H_\n"));
        assert!(rendered.contains("#define POWER_SUBSYSTEM_CONTAINERDEF_H_\n"));
        assert!(rendered.ends_with("#endif // POWER_SUBSYSTEM_CONTAINERDEF_H_\n"));
    }

    #[test]
    fn test_define_global_dedupes_by_name() {
        let mut unit = HeaderUnit::new("Thermal");
        assert!(unit.define_global("Mode", "namespace Mode { ... }\n"));
        assert!(!unit.define_global("Mode", "namespace Mode { other }\n"));
        let rendered = unit.render();
        assert_eq!(rendered.matches("namespace Mode").count(), 1);
    }

    #[test]
    fn test_render_enum_mixed_choices() {
        let choices: Vec<Choice> = vec![
            Choice::Valued(0, "OFF".to_string()),
            Choice::Valued(3, "ON".to_string()),
            Choice::Named("STANDBY MODE".to_string()),
        ];
        let rendered = render_enum("Mode", &choices);
        assert!(rendered.contains("namespace Mode {"));
        assert!(rendered.contains("        OFF = 0,\n"));
        assert!(rendered.contains("        ON = 3,\n"));
        assert!(rendered.contains("        STANDBY_MODE,\n"));
    }
}
