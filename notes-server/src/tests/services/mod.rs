mod auth_service;
mod doubles;
mod note_service;
