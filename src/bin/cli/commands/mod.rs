pub mod create;
pub mod generate;
pub mod pool;
pub mod search;
pub mod show;
