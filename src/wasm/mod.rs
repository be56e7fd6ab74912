//! WebAssembly bindings for the prodos8emu core.
//!
//! This module exposes a CPU bound to Apple II memory to JavaScript, with MLI
//! calls forwarded to a JavaScript callback.

pub mod api;

pub use api::EmulatorApple2;
