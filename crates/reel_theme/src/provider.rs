//! Theme provider and consumer handles
//!
//! [`ThemeProvider`] owns the live [`ThemeState`] for one component subtree.
//! It is mounted against an [`AppearanceHost`], recomputes the state whenever
//! the user's mode or the host appearance changes, and fans each new snapshot
//! out to subscribers. Consumers hold a [`ThemeContext`], a cheap cloneable
//! handle passed down the tree; it never grants direct write access to the
//! palette, only [`ThemeContext::set_mode`].
//!
//! Providers are independent: nesting one inside another creates a second,
//! unrelated state.
//!
//! ```rust
//! use std::sync::Arc;
//! use reel_theme::{AppearanceSignal, SystemAppearance, ThemeConfig, ThemeMode, ThemeProvider};
//!
//! let host = Arc::new(AppearanceSignal::new(SystemAppearance::Light));
//! let mut provider = ThemeProvider::new(ThemeConfig::default());
//! provider.mount(host.clone());
//!
//! let theme = provider.context();
//! host.set(SystemAppearance::Dark);
//! assert!(theme.state().unwrap().effective.is_dark());
//!
//! theme.set_mode(ThemeMode::Light).unwrap();
//! assert!(!theme.state().unwrap().effective.is_dark());
//! ```

use std::sync::{Arc, RwLock};

use slotmap::{new_key_type, SlotMap};

use crate::appearance::{Appearance, AppearanceResolver, SystemAppearance, ThemeMode};
use crate::color::Color;
use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::host::{AppearanceHost, ListenerId};
use crate::palette::Palette;
use crate::tokens::ColorToken;

new_key_type! {
    /// Handle for a theme subscription
    pub struct SubscriptionId;
}

/// Callback invoked with every new theme snapshot
pub type ThemeCallback = Arc<dyn Fn(&ThemeState) + Send + Sync>;

/// Immutable snapshot of the theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeState {
    /// What the user selected
    pub mode: ThemeMode,
    /// What renders
    pub effective: Appearance,
    /// Palette for `effective`
    pub palette: &'static Palette,
}

impl ThemeState {
    /// Compute the snapshot for a mode and host appearance
    pub fn resolve(mode: ThemeMode, host: SystemAppearance, resolver: &AppearanceResolver) -> Self {
        let effective = resolver.resolve(mode, host);
        Self {
            mode,
            effective,
            palette: Palette::for_appearance(effective),
        }
    }

    /// Get a color token value from the active palette
    pub fn color(&self, token: ColorToken) -> Color {
        self.palette.get(token)
    }

    pub fn is_dark(&self) -> bool {
        self.effective.is_dark()
    }
}

/// State that only exists while the provider is mounted
struct Mounted {
    mode: ThemeMode,
    host_appearance: SystemAppearance,
    state: ThemeState,
    /// Bumped on every snapshot change
    revision: u64,
    subscribers: SlotMap<SubscriptionId, ThemeCallback>,
}

struct Shared {
    config: ThemeConfig,
    resolver: AppearanceResolver,
    mounted: RwLock<Option<Mounted>>,
}

impl Shared {
    fn snapshot(&self) -> Result<ThemeState> {
        self.mounted
            .read()
            .unwrap()
            .as_ref()
            .map(|mounted| mounted.state)
            .ok_or(ThemeError::NoProvider)
    }

    fn revision(&self) -> Option<u64> {
        self.mounted
            .read()
            .unwrap()
            .as_ref()
            .map(|mounted| mounted.revision)
    }

    /// Apply `change`, recompute, and notify subscribers if the snapshot moved
    ///
    /// Subscribers run after the write lock is released, so every one of them
    /// sees the complete new snapshot and may call back into the context. A
    /// subscriber that changes the theme again supersedes this delivery: the
    /// nested update notifies everyone and the remaining stale calls are
    /// dropped.
    fn update(&self, change: impl FnOnce(&mut Mounted)) -> Result<ThemeState> {
        let (state, revision, callbacks) = {
            let mut guard = self.mounted.write().unwrap();
            let mounted = guard.as_mut().ok_or(ThemeError::NoProvider)?;
            let previous = mounted.state;

            change(mounted);
            mounted.state =
                ThemeState::resolve(mounted.mode, mounted.host_appearance, &self.resolver);

            if mounted.state == previous {
                return Ok(previous);
            }

            tracing::trace!(
                "theme recomputed: mode={} host={} effective={}",
                mounted.mode,
                mounted.host_appearance,
                mounted.state.effective
            );

            mounted.revision += 1;
            let callbacks: Vec<ThemeCallback> = mounted.subscribers.values().cloned().collect();
            (mounted.state, mounted.revision, callbacks)
        };

        for callback in callbacks {
            if self.revision() != Some(revision) {
                tracing::trace!("theme delivery superseded by a newer change");
                break;
            }
            callback(&state);
        }
        Ok(state)
    }

    fn on_host_change(&self, appearance: SystemAppearance) {
        let result = self.update(|mounted| {
            tracing::debug!(
                "ThemeProvider - host appearance {} -> {}",
                mounted.host_appearance,
                appearance
            );
            mounted.host_appearance = appearance;
        });

        // A change racing with unmount has nobody left to tell
        if let Err(ThemeError::NoProvider) = result {
            tracing::trace!("host appearance change ignored: provider unmounted");
        }
    }
}

struct HostBinding {
    host: Arc<dyn AppearanceHost>,
    listener: ListenerId,
}

/// Owner of the theme state for one subtree
///
/// Dropping the provider unmounts it.
pub struct ThemeProvider {
    shared: Arc<Shared>,
    binding: Option<HostBinding>,
}

impl ThemeProvider {
    /// Create an unmounted provider
    pub fn new(config: ThemeConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                resolver: config.resolver(),
                mounted: RwLock::new(None),
            }),
            binding: None,
        }
    }

    /// Create a provider and mount it against `host` in one step
    pub fn mounted<H: AppearanceHost + 'static>(config: ThemeConfig, host: Arc<H>) -> Self {
        let mut provider = Self::new(config);
        provider.mount(host);
        provider
    }

    /// Start providing theme state
    ///
    /// Sets the mode to the configured initial mode, subscribes to the host
    /// appearance, and returns the first snapshot. Mounting an already mounted
    /// provider leaves it untouched.
    pub fn mount<H: AppearanceHost + 'static>(&mut self, host: Arc<H>) -> ThemeState {
        if self.binding.is_some() {
            if let Ok(state) = self.shared.snapshot() {
                tracing::warn!("ThemeProvider::mount called on a mounted provider; ignoring");
                return state;
            }
            self.unmount();
        }

        let host: Arc<dyn AppearanceHost> = host;

        // Subscribe before reading the host so a change in between is not lost
        let weak_shared = Arc::downgrade(&self.shared);
        let weak_host = Arc::downgrade(&host);
        let listener = host.subscribe(Arc::new(move |reported: SystemAppearance| {
            let Some(shared) = weak_shared.upgrade() else {
                return;
            };
            // Another listener may have changed the host since this report
            let current = weak_host.upgrade().map_or(reported, |host| host.current());
            shared.on_host_change(current);
        }));

        let mode = self.shared.config.initial_mode;
        let host_appearance = host.current();
        let state = ThemeState::resolve(mode, host_appearance, &self.shared.resolver);

        *self.shared.mounted.write().unwrap() = Some(Mounted {
            mode,
            host_appearance,
            state,
            revision: 0,
            subscribers: SlotMap::with_key(),
        });
        self.binding = Some(HostBinding { host, listener });

        tracing::debug!(
            "ThemeProvider mounted: mode={} host={} effective={}",
            mode,
            host_appearance,
            state.effective
        );
        state
    }

    /// Stop providing theme state
    ///
    /// Unsubscribes from the host and drops every consumer subscription.
    /// Returns `false` if the provider was not mounted.
    pub fn unmount(&mut self) -> bool {
        let Some(binding) = self.binding.take() else {
            return false;
        };
        binding.host.unsubscribe(binding.listener);

        let dropped = self
            .shared
            .mounted
            .write()
            .unwrap()
            .take()
            .map(|mounted| mounted.subscribers.len())
            .unwrap_or(0);

        tracing::debug!("ThemeProvider unmounted ({} subscribers released)", dropped);
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.binding.is_some()
    }

    /// Handle for consumers in this provider's subtree
    pub fn context(&self) -> ThemeContext {
        ThemeContext {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl Drop for ThemeProvider {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Consumer handle onto a provider's theme state
///
/// Every operation fails with [`ThemeError::NoProvider`] while the provider
/// is not mounted.
#[derive(Clone)]
pub struct ThemeContext {
    shared: Arc<Shared>,
}

impl ThemeContext {
    /// Current snapshot
    pub fn state(&self) -> Result<ThemeState> {
        self.shared.snapshot()
    }

    /// Active palette
    pub fn colors(&self) -> Result<&'static Palette> {
        Ok(self.state()?.palette)
    }

    /// Get a color token value from the active palette
    pub fn color(&self, token: ColorToken) -> Result<Color> {
        Ok(self.state()?.color(token))
    }

    /// Select a theme mode
    ///
    /// Subscribers are notified with the new snapshot before this returns.
    /// Selecting the current mode changes nothing and notifies nobody.
    pub fn set_mode(&self, mode: ThemeMode) -> Result<ThemeState> {
        self.shared.update(|mounted| {
            if mounted.mode != mode {
                tracing::debug!(
                    "ThemeContext::set_mode - switching from {} to {}",
                    mounted.mode,
                    mode
                );
            }
            mounted.mode = mode;
        })
    }

    /// Select a theme mode by name (`light`, `dark`, `system`)
    pub fn set_mode_named(&self, name: &str) -> Result<ThemeState> {
        let mode: ThemeMode = name.parse()?;
        self.set_mode(mode)
    }

    /// Advance to the next mode in the light, dark, system cycle
    pub fn cycle_mode(&self) -> Result<ThemeState> {
        self.shared.update(|mounted| {
            let next = mounted.mode.next();
            tracing::debug!(
                "ThemeContext::cycle_mode - switching from {} to {}",
                mounted.mode,
                next
            );
            mounted.mode = next;
        })
    }

    /// Register a callback for every future snapshot change
    pub fn subscribe<F>(&self, callback: F) -> Result<SubscriptionId>
    where
        F: Fn(&ThemeState) + Send + Sync + 'static,
    {
        let mut guard = self.shared.mounted.write().unwrap();
        let mounted = guard.as_mut().ok_or(ThemeError::NoProvider)?;
        Ok(mounted.subscribers.insert(Arc::new(callback)))
    }

    /// Remove a subscription; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool> {
        let mut guard = self.shared.mounted.write().unwrap();
        let mounted = guard.as_mut().ok_or(ThemeError::NoProvider)?;
        Ok(mounted.subscribers.remove(id).is_some())
    }

    /// Number of live subscriptions (zero when unmounted)
    pub fn subscriber_count(&self) -> usize {
        self.shared
            .mounted
            .read()
            .unwrap()
            .as_ref()
            .map(|mounted| mounted.subscribers.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::AppearanceSignal;

    #[test]
    fn test_context_before_mount_fails() {
        let provider = ThemeProvider::new(ThemeConfig::default());
        let theme = provider.context();
        assert!(matches!(theme.state(), Err(ThemeError::NoProvider)));
        assert!(matches!(
            theme.set_mode(ThemeMode::Dark),
            Err(ThemeError::NoProvider)
        ));
        assert!(matches!(theme.subscribe(|_| {}), Err(ThemeError::NoProvider)));
    }

    #[test]
    fn test_initial_mode_from_config() {
        let host = Arc::new(AppearanceSignal::new(SystemAppearance::Light));
        let config = ThemeConfig::default().with_initial_mode(ThemeMode::Dark);
        let provider = ThemeProvider::mounted(config, host);
        let state = provider.context().state().unwrap();
        assert_eq!(state.mode, ThemeMode::Dark);
        assert_eq!(state.effective, Appearance::Dark);
    }

    #[test]
    fn test_double_mount_keeps_state() {
        let host = Arc::new(AppearanceSignal::new(SystemAppearance::Dark));
        let mut provider = ThemeProvider::mounted(ThemeConfig::default(), host.clone());
        provider.context().set_mode(ThemeMode::Light).unwrap();

        let state = provider.mount(host.clone());
        assert_eq!(state.mode, ThemeMode::Light);
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn test_drop_unmounts() {
        let host = Arc::new(AppearanceSignal::new(SystemAppearance::Light));
        let provider = ThemeProvider::mounted(ThemeConfig::default(), host.clone());
        let theme = provider.context();
        assert_eq!(host.listener_count(), 1);

        drop(provider);

        assert_eq!(host.listener_count(), 0);
        assert!(matches!(theme.state(), Err(ThemeError::NoProvider)));
    }
}
