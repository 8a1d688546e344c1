// Widget dashboard - category/widget state store with an HTTP adapter
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
