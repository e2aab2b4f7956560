//! Navigation seam used for the forced redirect after a 401.

/// Injected navigation callback.
///
/// A browser host would push onto its router; the CLI prints a hint.
pub trait Navigator: Send + Sync + 'static {
    /// Location currently displayed.
    fn current_path(&self) -> String;

    /// Move to `path`.
    fn navigate(&self, path: &str);
}

/// Navigator that never moves. Used by headless callers.
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn current_path(&self) -> String {
        String::new()
    }

    fn navigate(&self, _path: &str) {}
}
