//! Page Components

mod contact;
mod landing;

pub use contact::ContactSection;
pub use landing::LandingPage;
