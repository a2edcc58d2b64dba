mod init;
mod query;

pub use init::cmd_init;
pub use query::cmd_query;
