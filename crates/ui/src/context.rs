use std::sync::{Arc, Mutex, PoisonError};

use services::GameService;

/// Surface the composition root (the binary crate) exposes to the UI.
pub trait UiApp: Send + Sync {
    fn game(&self) -> Arc<Mutex<GameService>>;
}

#[derive(Clone)]
pub struct AppContext {
    game: Arc<Mutex<GameService>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { game: app.game() }
    }

    /// Runs `f` against the shared game facade under its lock.
    ///
    /// Every user action goes through here, which is what serializes calls
    /// the way the facade expects. A poisoned lock is taken over rather
    /// than propagated.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut GameService) -> R) -> R {
        let mut game = self.game.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut game)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
