//! Export boundaries for computed layouts.

pub mod svg;
