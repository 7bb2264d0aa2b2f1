//! Wire contracts shared between the admin console frontend and the
//! brokerage REST API: typed records per resource, list envelopes and
//! the error body shape.

pub mod domain;
pub mod shared;
pub mod system;
