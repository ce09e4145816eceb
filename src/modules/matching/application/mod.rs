pub mod resolver;

pub use resolver::ProfileResolver;
