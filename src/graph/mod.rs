// Rhyme graph construction — vocabulary, pairwise edges, families, output model.

pub mod builder;
pub mod families;
pub mod model;
pub mod vocabulary;
