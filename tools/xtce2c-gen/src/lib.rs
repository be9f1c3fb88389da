// SPDX-License-Identifier: Apache-2.0 OR MIT

//! YAML mission-database loader for the `xtce2c` compiler.

pub mod loader;
