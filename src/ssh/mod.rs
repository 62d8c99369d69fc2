mod alias;
mod block;
mod config_file;
mod key_store;

pub use alias::{validate_alias, validate_host, validate_proxy};
pub use block::{ConfigBlockBuilder, GITHUB_HOST, STRICT_HOST_KEY_CHECKING};
pub use config_file::{ConfigDocument, ConfigFileEditor, HostBlock, CONFIG_FILE_MODE};
pub use key_store::{KeyFileStore, KEY_FILE_MODE};
