mod config;
mod error;
pub mod logging;
mod os;
mod status;

pub use config::optional_from_env;
pub use error::{CapabilityError, Result};
pub use os::{create_directory, ensure_directory};
pub use status::{check_push_status, PushStatus};
