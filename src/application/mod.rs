// Application layer - Use cases and the presenter seam
pub mod chart_presenter;
pub mod plot_service;
