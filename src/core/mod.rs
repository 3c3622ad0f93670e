pub mod seed;
pub mod service;
pub mod store;

pub use crate::domain::model::{Activity, CapacityPolicy, Confirmation, Directory};
pub use crate::domain::ports::ActivityStore;
pub use crate::utils::error::Result;
