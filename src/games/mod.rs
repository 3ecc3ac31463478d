//! Game implementations.

pub mod strand;
