// Lyrics text handling — stanza segmentation, anchor words, annotation cleanup.

pub mod clean;
pub mod segment;
