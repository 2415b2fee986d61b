mod draft;
mod service;
mod snapshot;

pub use draft::{DraftError, TaskDraft};
pub use service::TaskService;
pub use snapshot::{HiddenTask, PendingTask, PendingTicket, TaskSnapshot};
