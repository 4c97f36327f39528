//! User control: run/stop state, prompts and key routing

pub mod input;
pub mod state;

pub use input::{parse_key_script, route, Command, Key, MouseButton};
pub use state::{ControlStateMachine, Prompt, RunState};
