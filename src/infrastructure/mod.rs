// Infrastructure layer - configuration, seeding, id generation and logging
pub mod config;
pub mod id_generator;
pub mod logging;
pub mod seed;
