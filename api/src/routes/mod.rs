pub mod diagnose;
pub mod health_chat;
pub mod usage_route;
