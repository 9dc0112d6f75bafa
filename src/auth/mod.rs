pub mod controller;
pub mod model;
pub mod response;
pub mod service;
pub mod validation;
