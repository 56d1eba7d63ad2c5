//! Databases of things with interior state shared across a solve.
//!
//! At present this is the [atom registry](atom::AtomRegistry), through which atoms are obtained.

pub mod atom;
