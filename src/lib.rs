//! Software Anecdotes
//!
//! A small routed single-page app built with Leptos (WASM).
//!
//! # Features
//!
//! - Browse a list of software anecdotes
//! - View one anecdote by id and vote for it
//! - Add new anecdotes through a form
//! - Transient confirmation notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in memory for the lifetime of one page load;
//! there is no server and nothing persists across reloads.

pub mod app;
pub mod components;
pub mod pages;
pub mod route;
pub mod state;
