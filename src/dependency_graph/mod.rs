/// Domain layer - dependency graph model and the services that build and analyze it
pub mod domain;
pub mod services;
