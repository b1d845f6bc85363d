pub mod canonical;
pub mod model;
pub mod pipeline;
pub mod validator;

pub use canonical::canonicalize;
pub use model::{Amount, IntakeStage, OrderView, Payload, Platform, Submission};
pub use pipeline::IntakePipeline;
pub use validator::{validate, Structure};
