pub mod generate;
pub mod image;
pub mod session;

pub use generate::*;
pub use image::*;
pub use session::*;
