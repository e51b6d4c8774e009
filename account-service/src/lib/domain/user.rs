pub mod errors;
pub mod gate;
pub mod models;
pub mod ports;
pub mod service;
pub mod validator;
