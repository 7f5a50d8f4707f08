// Autopal - automatic palindrome refinement
// Library exports

// Core modules
pub mod config;
pub mod filter;
pub mod generator;
pub mod lexicon;
pub mod oracle;
pub mod refine;
