//! schema-translate integration tests
//!
//! Exercises the public API end to end: Parquet schemas in, Hive type
//! strings and column lists out, and the Hive grammar back to the model.

pub mod common;
pub mod test_grammar_roundtrip;
pub mod test_hive_export;
pub mod test_parquet_import;

pub use common::*;
