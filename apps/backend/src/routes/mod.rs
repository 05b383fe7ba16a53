//! HTTP route handlers

pub mod cards;
pub mod feedback;
pub mod markup;
