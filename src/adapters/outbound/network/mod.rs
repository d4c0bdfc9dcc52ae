/// Network adapters for registry API calls
mod caching_crate_registry;
mod crates_io_client;

pub use caching_crate_registry::{CachingCrateRegistry, RegistryCache};
pub use crates_io_client::CratesIoClient;
