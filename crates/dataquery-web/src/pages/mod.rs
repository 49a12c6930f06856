//! Page Components

mod home;
mod not_found;
mod placeholder;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use placeholder::PlaceholderPage;
