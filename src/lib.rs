pub mod basics;
pub mod client;
pub mod command;
pub mod config;
pub mod console;
pub mod display;
pub mod eligibility;
pub mod logger;
pub mod poll;
