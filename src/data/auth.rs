use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Signed-in flag shared by the shell and every component that asks for it.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    signed_in: Arc<AtomicBool>,
}

impl AuthState {
    pub fn new(signed_in: bool) -> Self {
        Self {
            signed_in: Arc::new(AtomicBool::new(signed_in)),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }

    pub fn set_signed_in(&self, signed_in: bool) {
        self.signed_in.store(signed_in, Ordering::SeqCst);
    }
}
