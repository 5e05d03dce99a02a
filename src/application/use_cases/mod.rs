/// Use cases module containing application orchestration
mod run_application;

pub use run_application::RunApplicationUseCase;
