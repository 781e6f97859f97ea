pub mod call_type;
pub mod record;
