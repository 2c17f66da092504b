pub mod builder;
pub mod init;
