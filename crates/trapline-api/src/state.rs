//! Shared state for request handlers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use trapline_dashboard::{Command, Dashboard, DashboardState, DashboardView, FlashNotifier};

/// How long a form or refresh request waits for its commands by default.
pub const DEFAULT_COMMAND_WAIT: Duration = Duration::from_secs(10);

/// Handler state: the controller plus a lock-free view of its snapshot.
///
/// Commands are applied one batch at a time through the mutex. Page views
/// read the published snapshot directly, so they never wait on a command and
/// show the loading indicator while one is running.
#[derive(Clone)]
pub struct AppState {
    dashboard: Arc<Mutex<Dashboard>>,
    snapshot: watch::Receiver<DashboardState>,
    flash: FlashNotifier,
    backend: Arc<str>,
    command_wait: Duration,
}

impl AppState {
    /// Wraps a controller, routing its notifications to the page.
    pub fn new(dashboard: Dashboard) -> Self {
        let flash = FlashNotifier::new();
        let dashboard = dashboard.with_notifier(Arc::new(flash.clone()));
        let snapshot = dashboard.subscribe();
        let backend = Arc::from(dashboard.backend_description());
        Self {
            dashboard: Arc::new(Mutex::new(dashboard)),
            snapshot,
            flash,
            backend,
            command_wait: DEFAULT_COMMAND_WAIT,
        }
    }

    /// Sets how long [`AppState::settle`] waits before giving up.
    pub fn with_command_wait(mut self, wait: Duration) -> Self {
        self.command_wait = wait;
        self
    }

    /// Runs `commands` in order while holding the controller.
    ///
    /// Failures are already visible on the page (banner or notice), so they
    /// are only logged here.
    pub async fn run(&self, commands: impl IntoIterator<Item = Command>) {
        let mut dashboard = self.dashboard.lock().await;
        for command in commands {
            let name = command.name();
            if let Err(e) = dashboard.dispatch(command).await {
                tracing::debug!(command = name, error = %e, "Command failed");
            }
        }
    }

    /// Runs `commands` on a background task.
    ///
    /// The batch queues behind any batch already holding the controller and
    /// completes even if the caller goes away.
    pub fn spawn(&self, commands: Vec<Command>) -> JoinHandle<()> {
        let state = self.clone();
        tokio::spawn(async move { state.run(commands).await })
    }

    /// Runs `commands` in the background and waits for them, at most for the
    /// configured command wait.
    ///
    /// A batch still running when the wait ends keeps going; its effect shows
    /// on a later page view.
    pub async fn settle(&self, commands: Vec<Command>) {
        let names: Vec<&'static str> = commands.iter().map(Command::name).collect();
        match tokio::time::timeout(self.command_wait, self.spawn(commands)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(commands = ?names, error = %e, "Command task failed"),
            Err(_) => tracing::warn!(
                commands = ?names,
                wait = ?self.command_wait,
                "Commands still running; answering without them"
            ),
        }
    }

    /// Display model of the latest snapshot.
    pub fn view(&self) -> DashboardView {
        DashboardView::from(&*self.snapshot.borrow())
    }

    /// Removes the pending notification, if any.
    pub fn take_notice(&self) -> Option<String> {
        self.flash.take()
    }

    /// Backend base URL.
    pub fn backend(&self) -> &str {
        &self.backend
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
