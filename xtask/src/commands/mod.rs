//! Top-level command families.

pub mod class_table;
pub mod verify;
