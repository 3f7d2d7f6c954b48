// Phonetics — pronunciation lookup, rhyme keys, and the per-run lookup cache.

pub mod cache;
pub mod cmudict;
pub mod resolver;
pub mod traits;
