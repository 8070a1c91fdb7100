// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod plotly_mapper;
pub mod presenters;
pub mod series_loader;
