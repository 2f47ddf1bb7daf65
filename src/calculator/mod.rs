// Gateway module for the calculator - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod command;
mod engine;
mod keymap;

// Public re-exports - the ONLY way to access calculator functionality
pub use command::{parse_key_string, Action, CalcCommand, Operator};
pub use engine::{CalcSettings, CalcView, Calculator};
pub use keymap::{command_for_char, command_for_key};
