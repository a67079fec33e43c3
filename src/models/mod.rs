pub mod bookmark;
pub mod meme;
pub mod tag;
pub mod user;

pub use bookmark::Bookmark;
pub use meme::{Meme, MemeSort};
pub use tag::{MemeTag, Tag};
pub use user::User;
