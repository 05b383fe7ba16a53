//! Business logic services

pub mod collection;
pub mod sheet;
