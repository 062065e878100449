//! CSV and YAML file storage, one directory per property.

pub mod connection;
pub mod property_repository;
pub mod availability_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use property_repository::PropertyRepository;
pub use availability_repository::AvailabilityRepository;
