//! minisql - a minimal interactive SQL engine in Rust
//!
//! This crate interprets a small declarative query language with:
//! - SQL lexing and per-statement parsing (CREATE, INSERT, SELECT)
//! - An in-memory table catalog, owned by a single session
//! - Typed WHERE-clause filtering and textual result rendering

pub mod error;
pub mod sql;
