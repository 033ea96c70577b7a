//! Elliptic-curve signature recovery and address derivation.

pub mod recover;
