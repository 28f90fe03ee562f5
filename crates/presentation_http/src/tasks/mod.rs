//! Background tasks for the HTTP presentation layer

mod session_audit;

pub use session_audit::spawn_session_audit_task;
