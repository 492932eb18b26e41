mod dispatch;
pub mod list;
pub mod show;

pub use dispatch::dispatch;
