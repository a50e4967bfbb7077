//! # Prompt Template Modules
//!
//! Prompt templates sent to the text-completion model, grouped by purpose.

pub mod tasks;
