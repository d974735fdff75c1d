// src/core/mod.rs

pub mod gematria;
pub mod html;
pub mod net;
pub mod sanitize;
pub mod tables;

pub use tables::{Cell, RawTable};
