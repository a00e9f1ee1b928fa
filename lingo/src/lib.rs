pub mod domain;
pub mod lang;
pub mod ports;
pub mod service;
