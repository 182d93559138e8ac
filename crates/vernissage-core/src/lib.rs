//! Vernissage Core Types and Definitions
//!
//! This crate provides the foundational types for the Vernissage exhibition
//! layout system. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Footprints**: World-unit panel sizes derived from pixel dimensions
//!   ([`footprint::Footprint`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Plans**: The wall-by-wall layout plan model ([`plan`] module)
//! - **Walls**: The fixed enumeration of mountable wall surfaces
//!   ([`wall::Wall`])

pub mod color;
pub mod footprint;
pub mod geometry;
pub mod plan;
pub mod wall;
