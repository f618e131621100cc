pub mod auth_form;
pub mod carousel;
pub mod nav;
pub mod shell;
