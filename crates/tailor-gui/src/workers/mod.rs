mod dispatch;
mod import;
mod removal;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_log};
