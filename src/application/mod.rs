/// Application layer - Use cases, services and DTOs
///
/// This layer contains the application logic that orchestrates
/// the components and coordinates with infrastructure through ports.
pub mod dto;
pub mod services;
pub mod use_cases;
