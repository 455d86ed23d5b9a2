// Infrastructure layer module
// Contains storage adapters behind the domain repository interfaces

pub mod repositories;
