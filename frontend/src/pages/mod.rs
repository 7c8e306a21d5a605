pub mod admin_users;
pub mod create_user;
pub mod login;
pub mod register;
