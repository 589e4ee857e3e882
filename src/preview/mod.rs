mod gallery;

pub use gallery::{PreviewGallery, PreviewItem};
