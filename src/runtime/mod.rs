/// Runtime module - Gateway

mod one_shot;
mod repl;

pub use one_shot::OneShotRunner;
pub use repl::Repl;
