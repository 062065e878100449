//! Storage backed by the marketplace's HTTP API.

pub mod connection;
pub mod property_repository;
pub mod availability_repository;
mod wire;

#[cfg(test)]
pub mod test_server;

pub use connection::RemoteApiConnection;
pub use property_repository::RemotePropertyRepository;
pub use availability_repository::RemoteAvailabilityRepository;
