//! Services

pub mod sink;
