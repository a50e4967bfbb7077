//! # Providers
//!
//! HTTP-backed collaborators: the text-completion model (`ai`) and the recipe
//! server (`mealie`), plus the response handling they share (`http`).

pub mod ai;
pub mod http;
pub mod mealie;
