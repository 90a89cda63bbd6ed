pub mod compare;
mod command_result;
pub mod init;
pub mod unused;

pub use command_result::*;
