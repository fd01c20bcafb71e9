mod answer;
mod category;
mod entry;
mod rotation;
mod round;
mod session;

pub use answer::{Answer, title_case};
pub use category::{BUILTIN_CATEGORIES, Category, CategoryError, CategoryInfo};
pub use entry::{CatalogEntry, EntryError, SUPPORTED_EXTENSIONS};
pub use rotation::{Rotation, RotationError};
pub use round::RoundRecord;
pub use session::{GameMode, GameSession, SessionError, SessionProgress};
