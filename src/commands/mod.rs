mod docgen;

pub use docgen::*;
