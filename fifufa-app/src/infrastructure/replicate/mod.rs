mod client;
mod types;

pub use client::{ReplicateClient, DEFAULT_MODEL};
