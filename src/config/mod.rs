//! Configuration for dailycode.
//!
//! An optional YAML file (passed with `--config`) tunes where and how the
//! daily file is written. Unknown fields are ignored and every field has a
//! default, so an empty file and no file at all behave the same.

mod model;
mod operations;


pub use model::Config;
