//! Calculator services: one fixed binary operation per route.
//!
//! Two binaries are built from this crate:
//! - `add-sub-api` (`/add`, `/sub`, port 5000)
//! - `multiply-divide-api` (`/multiply`, `/divide`, port 5001)
//!
//! Every route takes `{"x": .., "y": ..}` and answers with the
//! `{"Message": .., "Status code": ..}` envelope.

pub mod envelope;
pub mod error;
pub mod operand;
pub mod operation;
pub mod request;
pub mod routes;

pub use envelope::Envelope;
pub use error::{CalcError, Result};
pub use operation::{Operation, Outcome};
pub use request::OperationRequest;
pub use routes::{ServiceKind, router};
