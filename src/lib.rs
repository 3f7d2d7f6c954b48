// Rhymegraph: rhyme networks from song lyrics and poetry
//
// This is the library root. Each module corresponds to one stage of the
// text -> rhyme graph pipeline, plus the outer configuration and output
// layers the binary drives.

pub mod config;
pub mod export;
pub mod graph;
pub mod lyrics;
pub mod output;
pub mod phonetics;
pub mod pipeline;
pub mod scoring;
