//! Terminal user interface: an MVI form over the conversion service.

pub mod app;
pub mod display;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
