//!
//! Traits Module
//!
//! This module contains the capability traits the outcome builder depends on.
//!
//! - [`assignment`]: Defines the trait through which an assignment exposes its identifying name.
//!
//! Implement these traits on lesson evaluation types to plug them into outcome assembly.

pub mod assignment;
