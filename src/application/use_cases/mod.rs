/// Use cases module containing application business logic orchestration
mod print_dependencies;

pub use print_dependencies::PrintDependenciesUseCase;
