pub mod auth;
pub mod cart;
pub mod components;
pub mod logging;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod storage;

// Mock API boundary; pages call it like they would a backend client
pub mod api;
