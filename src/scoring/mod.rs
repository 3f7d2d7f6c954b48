// Rhyme strength scoring — key similarity, stress agreement, confidence.

pub mod distance;
pub mod strength;
