use procmap_service::CompletionService;

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection). Holds no
/// per-request data, so cloning it for every request is cheap.
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    // External services:
    pub completion: CompletionService,
}

impl ServiceState {
    /// Creates the state from already constructed services.
    pub fn new(completion: CompletionService) -> Self {
        Self { completion }
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(completion: CompletionService);
