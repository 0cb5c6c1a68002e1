mod ids;
mod slug;

pub use ids::*;
pub use slug::*;
