pub mod handler;

pub use handler::{MISSING_IMAGE_MESSAGE, handle_index, handle_missing_image};
