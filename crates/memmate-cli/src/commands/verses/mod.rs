//! Verse management commands: add, list, show, update, remove, archive.

mod add;
mod archive;
mod list;
mod remove;
mod show;
mod update;

// Re-export public API
pub use add::handle_add;
pub use archive::{handle_archive, handle_unarchive};
pub use list::handle_list;
pub use remove::handle_remove;
pub use show::handle_show;
pub use update::handle_update;
