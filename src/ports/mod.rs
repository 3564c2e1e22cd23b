//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod ranking_repository;

pub use ranking_repository::RankingRepository;
