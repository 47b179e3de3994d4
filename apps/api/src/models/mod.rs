pub mod match_record;
pub mod preview;
