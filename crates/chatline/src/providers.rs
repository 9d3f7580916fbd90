pub mod base;
pub mod configs;
pub mod external;
pub mod factory;
pub mod placeholder;
pub mod utils;

#[cfg(test)]
pub mod mock;
