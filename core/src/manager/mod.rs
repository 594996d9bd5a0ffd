pub mod auth_code_manager;
