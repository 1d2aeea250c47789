mod book;
mod cart;
mod star;
mod video;

pub use book::BookIcon;
pub use cart::CartIcon;
pub use star::StarIcon;
pub use video::VideoIcon;
