//! Main module for symbols library functionality

pub mod catalogue;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
