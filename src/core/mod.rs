pub mod call_log;
pub mod parser;
