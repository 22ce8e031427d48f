pub mod request_id;

pub use request_id::{propagate_request_id, request_span, RequestId};
