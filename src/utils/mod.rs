pub mod file;
pub mod logging;
pub mod natural;
pub mod naming;
pub mod paths;
pub mod time;

pub use file::{ensure_directory_exists, exists, get_file_extension, get_file_owner, is_dir};
pub use logging::init_logging;
pub use natural::{
    natural_sort, natural_sort_opt, sort_natural, CaseSensitivity, Natural, NaturalSort,
};
pub use naming::{clean_name, str_replace, to_filename};
pub use paths::{
    get_package_cache_directory, get_package_config_directory, get_user_font_directory,
    get_user_fontconfig_directory, Directories,
};
pub use time::get_local_time;
