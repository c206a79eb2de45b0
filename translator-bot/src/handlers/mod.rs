//! Handlers for the chain: commands first, then translation.

mod command_handler;
mod translate_handler;

pub use command_handler::CommandHandler;
pub use translate_handler::TranslateHandler;
