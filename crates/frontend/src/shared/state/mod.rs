pub mod request_scope;

pub use request_scope::{use_request_scope, RequestScope, Ticket};
