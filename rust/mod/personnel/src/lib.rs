//! Personnel: backend users seen as maintenance staff.

pub mod assembler;
pub mod model;
pub mod service;

pub use model::{NewPersonnel, Personnel, UserResource, DEFAULT_ROLE};
pub use service::PersonnelService;
