pub mod auth;
pub mod auth_response;
pub mod login_request;
pub mod register_request;
