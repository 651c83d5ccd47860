#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # berth
//!
//! Terminal front-end for the connection form: input widgets, the screen
//! model, a slim Elm-style runner, and the CLI/logging bootstrap. The form
//! rules themselves live in `berth-form`.

pub mod cli;
pub mod event;
pub mod screen;
pub mod widgets;
