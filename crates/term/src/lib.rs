//! Terminal renderer for the rules engine.
//!
//! The board is drawn into a plain framebuffer which is then flushed to the
//! terminal, without a widget toolkit in between.
//!
//! - [`fb`]: styled character framebuffer
//! - [`board_view`]: pure mapping from a [`core::Game`] to a framebuffer
//! - [`renderer`]: raw-mode terminal session with diff flushing

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
