mod log;

pub use log::EVMLog;
