//! Terminal presentation
//!
//! Everything the core hands this layer is a [`crate::core::BoardSnapshot`]
//! or a [`crate::session::Notice`]; art and color live here and nowhere else.

mod display;
mod gallows;

pub use display::{TerminalPresenter, print_instructions, print_outcome, print_stats};
pub use gallows::frame as gallows_frame;
