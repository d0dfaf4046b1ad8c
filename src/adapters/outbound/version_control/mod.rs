/// Version-control adapters
mod caching_client;

pub use caching_client::CachingVersionControlClient;
