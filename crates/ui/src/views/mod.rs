mod menu;
mod play;

pub use menu::MenuView;
pub use play::PlayView;
