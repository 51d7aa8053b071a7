//! Presentation layer exposing the crate to JavaScript.

pub mod wasm_api;

pub use wasm_api::StarSimApi;
