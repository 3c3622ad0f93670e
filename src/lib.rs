pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::ServerConfig;

pub use config::Settings;
pub use core::{service::ActivityService, store::InMemoryActivityStore};
pub use domain::model::{Activity, CapacityPolicy, Confirmation, Directory};
pub use domain::ports::ActivityStore;
pub use http::{ActivityServer, ShutdownHandle};
pub use utils::error::{Result, SignupError};
