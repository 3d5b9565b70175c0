pub mod config;
pub mod contact;
pub mod layout;
pub mod run;
