//! Types shared by the plant shop front end and its launcher: the plant
//! model, request payloads, the error taxonomy and the catalog state machine.

pub mod catalog;
pub mod error;
pub mod model;
pub mod requests;
