pub mod health_chat_response;
pub mod health_chat_route;
