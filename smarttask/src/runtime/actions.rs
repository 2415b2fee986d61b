use crate::app::{App, Screen};
use crate::tasks::{HiddenTask, PendingTicket, TaskService};
use crate::types::NewTask;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, service: &TaskService) {
    match action {
        Action::Refresh(screen) => {
            refresh_screen(app, service, screen).await;
        }
        Action::CreateTask { ticket, task } => {
            handle_create_task(app, service, ticket, task).await;
        }
        Action::CompleteTask { hidden } => {
            handle_complete_task(app, service, hidden).await;
        }
    }
}

/// Reload one screen's snapshot. A failed read keeps the old rows.
pub(crate) async fn refresh_screen(app: &mut App, service: &TaskService, screen: Screen) {
    match service.list(screen.filter()).await {
        Ok(tasks) => app.apply_refresh(screen, tasks),
        Err(e) => app.set_error(format!("Could not load tasks: {}", e)),
    }
}

async fn handle_create_task(
    app: &mut App,
    service: &TaskService,
    ticket: PendingTicket,
    task: NewTask,
) {
    let result = service.create(&task).await;
    app.tasks.resolve_pending(ticket);

    match result {
        Ok(created) => {
            app.set_status(format!("Added \"{}\"", created.title));
            refresh_screen(app, service, Screen::Tasks).await;
        }
        Err(e) => {
            app.set_error(format!("Could not save \"{}\": {}", task.title, e));
        }
    }
}

async fn handle_complete_task(app: &mut App, service: &TaskService, hidden: HiddenTask) {
    match service.mark_complete(&hidden.task.id).await {
        Ok(()) => {
            app.set_status(format!("Completed \"{}\"", hidden.task.title));
            refresh_screen(app, service, Screen::Tasks).await;
        }
        Err(e) => {
            let message = format!("Could not complete \"{}\": {}", hidden.task.title, e);
            app.revert_complete(hidden);
            app.set_error(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{StatusKind, TextInput};
    use crate::reminder::NoopScheduler;
    use crate::store::{MemoryTaskStore, TaskStore};
    use std::sync::Arc;

    fn service_for(store: &MemoryTaskStore) -> TaskService {
        TaskService::new(Arc::new(store.clone()), Arc::new(NoopScheduler))
    }

    async fn loaded_app(service: &TaskService) -> App {
        let mut app = App::new();
        refresh_screen(&mut app, service, Screen::Tasks).await;
        refresh_screen(&mut app, service, Screen::Completed).await;
        app
    }

    fn submit(app: &mut App, title: &str) -> Action {
        app.open_form();
        app.form.as_mut().unwrap().title = TextInput::from_str(title);
        let (ticket, task) = app.submit_form().unwrap();
        Action::CreateTask { ticket, task }
    }

    #[tokio::test]
    async fn create_replaces_pending_row_with_stored_task() {
        let store = MemoryTaskStore::new();
        let service = service_for(&store);
        let mut app = loaded_app(&service).await;

        let action = submit(&mut app, "Buy milk");
        assert_eq!(app.tasks.pending().len(), 1);

        run_action(action, &mut app, &service).await;

        assert!(app.tasks.pending().is_empty());
        assert_eq!(app.tasks.tasks().len(), 1);
        assert_eq!(app.tasks.tasks()[0].title, "Buy milk");
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Info);
    }

    #[tokio::test]
    async fn failed_create_drops_pending_row_and_reports() {
        let store = MemoryTaskStore::new();
        let service = service_for(&store);
        let mut app = loaded_app(&service).await;

        let action = submit(&mut app, "Buy milk");
        store.fail_next_write("offline");
        run_action(action, &mut app, &service).await;

        assert!(app.tasks.pending().is_empty());
        assert!(app.tasks.tasks().is_empty());
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.contains("offline"));
    }

    #[tokio::test]
    async fn complete_moves_task_to_completed_screen() {
        let store = MemoryTaskStore::seeded();
        let service = service_for(&store);
        let mut app = loaded_app(&service).await;
        let open_before = app.tasks.tasks().len();

        let hidden = app.begin_complete().unwrap();
        let id = hidden.task.id.clone();
        assert_eq!(app.tasks.tasks().len(), open_before - 1);

        run_action(Action::CompleteTask { hidden }, &mut app, &service).await;
        run_action(Action::Refresh(Screen::Completed), &mut app, &service).await;

        assert!(!app.tasks.contains(&id));
        assert!(app.completed.contains(&id));
    }

    #[tokio::test]
    async fn failed_complete_restores_task_and_reports() {
        let store = MemoryTaskStore::seeded();
        let service = service_for(&store);
        let mut app = loaded_app(&service).await;
        let before: Vec<_> = app.tasks.tasks().to_vec();

        let hidden = app.begin_complete().unwrap();
        store.fail_next_write("quota exceeded");
        run_action(Action::CompleteTask { hidden }, &mut app, &service).await;

        assert_eq!(app.tasks.tasks(), before.as_slice());
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);
        let stored = store.list_all().await.unwrap();
        for task in &before {
            assert!(stored.iter().any(|t| t.id == task.id && !t.completed));
        }
    }

    #[tokio::test]
    async fn complete_of_vanished_task_counts_as_done() {
        let store = MemoryTaskStore::seeded();
        let service = service_for(&store);
        let mut app = loaded_app(&service).await;

        let mut hidden = app.begin_complete().unwrap();
        hidden.task.id = "gone".into();
        run_action(Action::CompleteTask { hidden }, &mut app, &service).await;

        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Info);
    }
}
