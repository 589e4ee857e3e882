mod cdn;
mod sizing;

pub use cdn::optimize_image_url;
pub use sizing::{resolve_target_width, ImageSlot};
