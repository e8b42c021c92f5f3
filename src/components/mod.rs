//! View Components

mod drop_zone;
mod menu_item;
mod progress_bar;

pub use drop_zone::DropZone;
pub use menu_item::MenuItem;
pub use progress_bar::ProgressBar;
