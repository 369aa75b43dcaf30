//! SeaORM entities backing the dashboard queries.

pub mod remote_installation_count;
pub mod remote_push_device_token;
pub mod remote_server;
pub mod remote_server_plan;
pub mod remote_server_user_count;
