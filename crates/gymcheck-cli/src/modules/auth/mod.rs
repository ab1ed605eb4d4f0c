mod actions;
pub(crate) mod args;

pub(crate) use actions::{
    handle_forgot_password, handle_login, handle_logout, handle_register, handle_reset_password,
    handle_whoami,
};
