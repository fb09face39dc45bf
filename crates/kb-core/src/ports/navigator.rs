/// Client-side navigation. Fire-and-forget from the caller's perspective.
pub trait NavigatorPort: Send + Sync {
    /// Navigate to `path`, adding a history entry.
    fn push(&self, path: &str);

    /// Navigate to `path`, replacing the current history entry.
    fn replace(&self, path: &str);
}
