mod loader;

pub use loader::{AliasConfig, Config, ReportConfig};
