pub mod code_gen;
pub mod location;
