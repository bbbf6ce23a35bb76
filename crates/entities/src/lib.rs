pub mod protocol_step;
pub mod reference_protocol;
