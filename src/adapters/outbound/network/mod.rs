/// Network adapters for external API calls
mod dtrack_client;

pub use dtrack_client::DtrackClient;
