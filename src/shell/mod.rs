//! Interactive shell
//!
//! Parameter entry followed by a numbered menu loop. Input comes through the
//! [`InputSource`] trait so a session can be scripted.

pub mod console;
pub mod input;
pub mod menu;
pub mod session;

pub use console::Console;
pub use input::{InputSource, ScriptedInput, StdinInput};
pub use menu::MenuChoice;
pub use session::{Flow, Shell};
