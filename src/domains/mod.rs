//! Domain modules containing business logic organized by bounded contexts.

pub mod tools;
