//! User notification capability

/// Message shown once a submission is accepted.
pub const SUCCESS_MESSAGE: &str = "Endereço cadastrado com sucesso!";

/// Reports submission outcomes to the user.
///
/// A browser host maps both calls to a blocking `alert`; other hosts may
/// use toasts or capture the messages (see
/// [`CapturingNotifier`](crate::memory::CapturingNotifier)).
pub trait Notifier: Send + Sync {
    /// A submission was rejected.
    fn error(&self, message: &str);

    /// A submission was accepted.
    fn success(&self, message: &str);
}
