mod filesystem;
mod loader;
mod model;
mod template;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{FileConfigLoader, LoadResult};
pub use model::{
    CliOverrides, Config, ConfigFile, DEFAULT_AFFILIATION, DEFAULT_IGNORED_DIRS,
    DEFAULT_OUTPUT_DIR, DEFAULT_TOP_N, TOKEN_PLACEHOLDER, Theme, Visibility,
};
pub use template::DEFAULT_CONFIG_TEMPLATE;
