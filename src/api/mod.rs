//! JSON representations of the domain types, as printed by the command line
//! interface.

pub mod dto;
