// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod import;

pub use import::{parse_training_csv, ImportReport};
