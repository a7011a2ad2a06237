pub mod fs;

pub use fs::{absolutize, is_dir, join_root, normalize, path_exists};
