mod device;
mod header;

pub use device::{uses_compact_header, DeviceMode};
pub use header::HeaderVisibility;
