// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod convert;
pub mod file;
pub mod normalize;
pub mod progress;
pub mod records;
pub mod runner;
pub mod source;
pub mod xml;
