//! Host appearance signal
//!
//! The host platform pushes its light/dark preference whenever the user flips
//! it at the OS level. [`AppearanceHost`] is the seam a platform layer
//! implements; [`AppearanceSignal`] is a ready-made in-process implementation
//! that a platform layer can feed from its own event loop.

use std::sync::{Arc, Mutex, RwLock};

use slotmap::{new_key_type, SlotMap};

use crate::appearance::SystemAppearance;

new_key_type! {
    /// Handle for a registered appearance listener
    pub struct ListenerId;
}

/// Callback invoked with the new host appearance
pub type AppearanceListener = Arc<dyn Fn(SystemAppearance) + Send + Sync>;

/// Source of the host's system appearance
pub trait AppearanceHost: Send + Sync {
    /// The appearance the host reports right now
    fn current(&self) -> SystemAppearance;

    /// Register a listener, called on every subsequent change
    fn subscribe(&self, listener: AppearanceListener) -> ListenerId;

    /// Remove a listener; unknown ids are ignored
    fn unsubscribe(&self, id: ListenerId);
}

/// Push-based appearance signal
pub struct AppearanceSignal {
    current: RwLock<SystemAppearance>,
    listeners: Mutex<SlotMap<ListenerId, AppearanceListener>>,
}

impl AppearanceSignal {
    pub fn new(initial: SystemAppearance) -> Self {
        Self {
            current: RwLock::new(initial),
            listeners: Mutex::new(SlotMap::with_key()),
        }
    }

    /// Report a new host appearance
    ///
    /// Listeners run after the value is stored and outside any lock, so they
    /// may read or set the signal again. A listener that sets a new value
    /// supersedes this delivery. Setting the current value is a no-op.
    pub fn set(&self, appearance: SystemAppearance) {
        {
            let mut current = self.current.write().unwrap();
            if *current == appearance {
                return;
            }
            tracing::debug!(
                "AppearanceSignal::set - host appearance {} -> {}",
                *current,
                appearance
            );
            *current = appearance;
        }

        let listeners: Vec<AppearanceListener> =
            self.listeners.lock().unwrap().values().cloned().collect();
        for listener in listeners {
            if self.current() != appearance {
                break;
            }
            listener(appearance);
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl Default for AppearanceSignal {
    fn default() -> Self {
        Self::new(SystemAppearance::Unknown)
    }
}

impl AppearanceHost for AppearanceSignal {
    fn current(&self) -> SystemAppearance {
        *self.current.read().unwrap()
    }

    fn subscribe(&self, listener: AppearanceListener) -> ListenerId {
        self.listeners.lock().unwrap().insert(listener)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.lock().unwrap().remove(id);
    }
}
