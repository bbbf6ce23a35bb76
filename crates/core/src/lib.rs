mod step;
pub use step::{ProtocolStep, StructuredStep};

mod extract;
pub use extract::{ExtractedProtocol, extract_protocol};

mod describe;
pub use describe::format_procedure;

mod protocol;
pub use protocol::{MAX_PROTOCOL_STEPS, embed_protocol};

mod reference;
pub use reference::{ProtocolSearchHit, ReferenceProtocol};
