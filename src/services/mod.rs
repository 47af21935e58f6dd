pub mod pagination;
pub mod session;

pub use pagination::{
    ApplyOutcome, ControllerState, FetchCompletion, FetchRequest, PaginationController, Phase,
};
pub use session::SearchSession;
