//! Request description, transport and the per-request execution unit.
mod spec;
mod transport;
mod unit;


pub use spec::RequestSpec;
pub use transport::{Exchange, ReqwestTransport, Transport};
pub use unit::{ExecutionUnit, Executor};
