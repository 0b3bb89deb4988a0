mod model;
mod persistence;
mod theme;

pub use model::{AppConfig, RegistryConfig, UiConfig};
pub use persistence::{
    config_base_dir, config_path, load_config, load_config_from, save_config, save_config_to,
};
pub use theme::{HeaderTheme, ThemeChoice};
