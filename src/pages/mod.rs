//! Page components for Eldritch Eclipse.

mod designer;
mod landing;

pub use designer::Designer;
pub use landing::Landing;
