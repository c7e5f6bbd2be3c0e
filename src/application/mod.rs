//! Application layer - Use cases and orchestration

pub mod feed;
pub mod init;
pub mod list_records;
pub mod list_tags;
pub mod manage_config;
pub mod show_record;

pub use feed::build_feed;
pub use list_records::list_records;
pub use list_tags::list_tags;
pub use manage_config::ConfigService;
pub use show_record::show_record;
