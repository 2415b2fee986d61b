use crate::app::Screen;
use crate::tasks::{HiddenTask, PendingTicket};
use crate::types::NewTask;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    Refresh(Screen),
    CreateTask {
        ticket: PendingTicket,
        task: NewTask,
    },
    CompleteTask {
        hidden: HiddenTask,
    },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
