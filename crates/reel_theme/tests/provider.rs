use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use reel_theme::{
    Appearance, AppearanceHost, AppearanceSignal, ColorToken, Palette, SystemAppearance,
    ThemeConfig, ThemeError, ThemeMode, ThemeProvider, ThemeState,
};

fn mounted(host: SystemAppearance) -> (Arc<AppearanceSignal>, ThemeProvider) {
    let signal = Arc::new(AppearanceSignal::new(host));
    let provider = ThemeProvider::mounted(ThemeConfig::default(), signal.clone());
    (signal, provider)
}

#[test]
fn mount_starts_in_system_mode_and_follows_host() {
    let (host, provider) = mounted(SystemAppearance::Unknown);
    let theme = provider.context();

    let state = theme.state().unwrap();
    assert_eq!(state.mode, ThemeMode::System);
    assert_eq!(state.effective, Appearance::Light);

    host.set(SystemAppearance::Dark);
    let state = theme.state().unwrap();
    assert_eq!(state.effective, Appearance::Dark);
    assert_eq!(state.palette, Palette::dark());
}

#[test]
fn explicit_mode_is_independent_of_host() {
    let (host, provider) = mounted(SystemAppearance::Dark);
    let theme = provider.context();

    theme.set_mode(ThemeMode::Light).unwrap();
    for appearance in [
        SystemAppearance::Dark,
        SystemAppearance::Unknown,
        SystemAppearance::Light,
        SystemAppearance::Dark,
    ] {
        host.set(appearance);
        let state = theme.state().unwrap();
        assert_eq!(state.mode, ThemeMode::Light);
        assert_eq!(state.effective, Appearance::Light);
    }
}

#[test]
fn unknown_host_uses_configured_fallback() {
    let host = Arc::new(AppearanceSignal::new(SystemAppearance::Unknown));
    let config = ThemeConfig::default().with_fallback(Appearance::Dark);
    let provider = ThemeProvider::mounted(config, host);

    assert_eq!(provider.context().state().unwrap().effective, Appearance::Dark);
}

#[test]
fn set_mode_is_idempotent() {
    let (_host, provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();

    let once = theme.set_mode(ThemeMode::Dark).unwrap();
    let twice = theme.set_mode(ThemeMode::Dark).unwrap();
    assert_eq!(once, twice);
    assert_eq!(theme.state().unwrap(), once);
}

#[test]
fn set_mode_named_rejects_unknown_modes() {
    let (_host, provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();
    theme.set_mode(ThemeMode::Dark).unwrap();

    let err = theme.set_mode_named("sepia").unwrap_err();
    assert!(matches!(err, ThemeError::InvalidMode(ref name) if name == "sepia"));
    // Failed calls leave the state untouched
    assert_eq!(theme.state().unwrap().mode, ThemeMode::Dark);

    let state = theme.set_mode_named("Light").unwrap();
    assert_eq!(state.mode, ThemeMode::Light);
}

#[test]
fn cycle_mode_walks_light_dark_system() {
    let host = Arc::new(AppearanceSignal::new(SystemAppearance::Dark));
    let config = ThemeConfig::default().with_initial_mode(ThemeMode::Light);
    let provider = ThemeProvider::mounted(config, host);
    let theme = provider.context();

    let modes: Vec<ThemeMode> = (0..4).map(|_| theme.cycle_mode().unwrap().mode).collect();
    assert_eq!(
        modes,
        vec![
            ThemeMode::Dark,
            ThemeMode::System,
            ThemeMode::Light,
            ThemeMode::Dark
        ]
    );
}

#[test]
fn subscribers_see_complete_snapshots_in_order() {
    let (host, provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();

    let seen: Arc<Mutex<Vec<ThemeState>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let reader = theme.clone();
    theme
        .subscribe(move |state| {
            // Re-entrant reads observe the same fully-updated state
            assert_eq!(reader.state().unwrap(), *state);
            assert_eq!(state.palette, Palette::for_appearance(state.effective));
            sink.lock().unwrap().push(*state);
        })
        .unwrap();

    theme.set_mode(ThemeMode::Dark).unwrap();
    theme.set_mode(ThemeMode::System).unwrap();
    host.set(SystemAppearance::Dark);

    let seen = seen.lock().unwrap();
    let observed: Vec<(ThemeMode, Appearance)> =
        seen.iter().map(|s| (s.mode, s.effective)).collect();
    assert_eq!(
        observed,
        vec![
            (ThemeMode::Dark, Appearance::Dark),
            (ThemeMode::System, Appearance::Light),
            (ThemeMode::System, Appearance::Dark),
        ]
    );
}

#[test]
fn unchanged_state_does_not_notify() {
    let (host, provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();
    theme.set_mode(ThemeMode::Dark).unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    theme
        .subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    theme.set_mode(ThemeMode::Dark).unwrap();
    // Explicit mode: host changes do not move the snapshot
    host.set(SystemAppearance::Dark);

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn unsubscribe_stops_notifications() {
    let (_host, provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let id = theme
        .subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    theme.set_mode(ThemeMode::Dark).unwrap();
    assert!(theme.unsubscribe(id).unwrap());
    assert!(!theme.unsubscribe(id).unwrap());
    theme.set_mode(ThemeMode::Light).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unmount_fails_reads_and_releases_listeners() {
    let (host, mut provider) = mounted(SystemAppearance::Dark);
    let theme = provider.context();
    theme.subscribe(|_| {}).unwrap();
    assert_eq!(host.listener_count(), 1);
    assert_eq!(theme.subscriber_count(), 1);

    assert!(provider.unmount());
    assert!(!provider.unmount());

    assert!(matches!(theme.state(), Err(ThemeError::NoProvider)));
    assert!(matches!(
        theme.color(ColorToken::Primary),
        Err(ThemeError::NoProvider)
    ));
    assert!(matches!(
        theme.set_mode(ThemeMode::Light),
        Err(ThemeError::NoProvider)
    ));
    assert_eq!(host.listener_count(), 0);
    assert_eq!(theme.subscriber_count(), 0);

    // Host changes after unmount reach nobody
    host.set(SystemAppearance::Light);
    assert!(matches!(theme.state(), Err(ThemeError::NoProvider)));
}

#[test]
fn remount_starts_fresh() {
    let (host, mut provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();
    theme.set_mode(ThemeMode::Dark).unwrap();

    provider.unmount();
    provider.mount(host);

    assert_eq!(theme.state().unwrap().mode, ThemeMode::System);
}

#[test]
fn nested_providers_are_independent() {
    let host = Arc::new(AppearanceSignal::new(SystemAppearance::Light));
    let outer = ThemeProvider::mounted(ThemeConfig::default(), host.clone());
    let inner = ThemeProvider::mounted(ThemeConfig::default(), host.clone());

    inner.context().set_mode(ThemeMode::Dark).unwrap();
    assert_eq!(outer.context().state().unwrap().mode, ThemeMode::System);
    assert_eq!(outer.context().state().unwrap().effective, Appearance::Light);

    drop(inner);
    assert_eq!(host.listener_count(), 1);
    assert!(outer.context().state().is_ok());
}

#[test]
fn raw_color_access_tracks_effective_palette() {
    let (host, provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();

    assert_eq!(
        theme.color(ColorToken::Background).unwrap(),
        Palette::light().background
    );
    host.set(SystemAppearance::Dark);
    assert_eq!(theme.colors().unwrap(), Palette::dark());
}

#[test]
fn reentrant_set_mode_leaves_every_subscriber_on_the_latest_state() {
    let (_host, provider) = mounted(SystemAppearance::Light);
    let theme = provider.context();

    // Refuses dark mode by switching straight back to light
    let reverter = theme.clone();
    theme
        .subscribe(move |state| {
            if state.mode == ThemeMode::Dark {
                reverter.set_mode(ThemeMode::Light).unwrap();
            }
        })
        .unwrap();

    let seen: Arc<Mutex<Vec<ThemeMode>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    theme
        .subscribe(move |state| sink.lock().unwrap().push(state.mode))
        .unwrap();

    theme.set_mode(ThemeMode::Dark).unwrap();

    assert_eq!(theme.state().unwrap().mode, ThemeMode::Light);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.last().copied(), Some(ThemeMode::Light));
    assert_eq!(*seen, vec![ThemeMode::Light]);
}

#[test]
fn provider_tracks_host_when_a_listener_rewrites_it() {
    let host = Arc::new(AppearanceSignal::new(SystemAppearance::Light));

    // Registered ahead of the provider: forces the host back to light
    let bouncer = Arc::downgrade(&host);
    host.subscribe(Arc::new(move |appearance: SystemAppearance| {
        if appearance == SystemAppearance::Dark {
            if let Some(host) = bouncer.upgrade() {
                host.set(SystemAppearance::Light);
            }
        }
    }));

    let provider = ThemeProvider::mounted(ThemeConfig::default(), host.clone());
    host.set(SystemAppearance::Dark);

    assert_eq!(host.current(), SystemAppearance::Light);
    assert_eq!(
        provider.context().state().unwrap().effective,
        Appearance::Light
    );
}
