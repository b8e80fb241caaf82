pub mod cents;
pub mod config;
pub mod record;
pub mod rollup;
pub mod week;

pub use cents::Cents;
pub use config::Config;
pub use record::Record;
pub use week::Week;
