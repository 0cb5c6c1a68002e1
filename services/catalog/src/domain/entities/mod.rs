mod product;
mod product_image;

pub use product::*;
pub use product_image::*;
