pub mod app_state_builder;
pub mod stubs;
pub mod test_app;
