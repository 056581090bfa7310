//! # argweave-lombok
//!
//! Runs Lombok's registered post-compiler handlers against existing class
//! files, modifying them in place.

pub mod post_compile;

pub use post_compile::{LOMBOK_MAIN_CLASS, PostCompile};
