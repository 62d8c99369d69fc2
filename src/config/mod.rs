mod paths;
mod settings;

pub use paths::SshPaths;
pub use settings::Settings;
