//! Subcommand implementations

use std::sync::Arc;

use anyhow::{Context, Result};
use reel_theme::{
    Appearance, AppearanceSignal, SystemAppearance, ThemeMode, ThemeProvider,
};
use reel_ui::{ComponentFamily, ThemeToggle};
use serde::Serialize;

use crate::format;
use crate::{PaletteFormat, Session};

/// Mount a provider fed by a fixed host appearance, applying any `--mode`
fn mount(session: &Session) -> Result<ThemeProvider> {
    let host = Arc::new(AppearanceSignal::new(session.host));
    let provider = ThemeProvider::mounted(session.config, host);
    if let Some(mode) = session.mode {
        provider
            .context()
            .set_mode(mode)
            .context("Failed to apply --mode")?;
    }
    Ok(provider)
}

#[derive(Serialize)]
struct StateReport {
    mode: ThemeMode,
    host: SystemAppearance,
    effective: Appearance,
    fallback: Appearance,
}

pub fn state(session: &Session, json: bool) -> Result<()> {
    let provider = mount(session)?;
    let state = provider.context().state()?;

    let report = StateReport {
        mode: state.mode,
        host: session.host,
        effective: state.effective,
        fallback: session.config.fallback_appearance,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("mode:      {}", report.mode);
        println!("host:      {}", report.host);
        println!("effective: {}", report.effective);
        println!("fallback:  {}", report.fallback);
    }
    Ok(())
}

pub fn palette(session: &Session, output: PaletteFormat) -> Result<()> {
    let provider = mount(session)?;
    let palette = provider.context().colors()?;

    match output {
        PaletteFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&palette.to_css_variable_map())?
            );
        }
        PaletteFormat::Css => println!("{}", format::css_variables(palette)),
    }
    Ok(())
}

pub fn style(session: &Session, family: &str, variant: &str, size: &str, json: bool) -> Result<()> {
    let family: ComponentFamily = family.parse().with_context(|| {
        let known: Vec<&str> = ComponentFamily::ALL.iter().map(|f| f.name()).collect();
        format!("Expected one of: {}", known.join(", "))
    })?;

    let provider = mount(session)?;
    let palette = provider.context().colors()?;

    tracing::debug!("resolving {} variant={:?} size={:?}", family, variant, size);
    let style = family.resolve_style(variant, size, palette);

    if json {
        println!("{}", serde_json::to_string_pretty(&style)?);
    } else {
        for (name, value) in style.properties() {
            println!("{}: {}", name, format::style_value(&value));
        }
    }
    Ok(())
}

pub fn cycle(session: &Session, steps: usize) -> Result<()> {
    let provider = mount(session)?;
    let theme = provider.context();

    let initial = ThemeToggle::render(&theme)?;
    println!("{} {:<5} {}", initial.icon, initial.label, initial.caption);

    let id = theme.subscribe(|state| {
        let toggle = ThemeToggle::from_state(state);
        println!("{} {:<5} {}", toggle.icon, toggle.label, toggle.caption);
    })?;

    for _ in 0..steps {
        ThemeToggle::press(&theme)?;
    }

    theme.unsubscribe(id)?;
    Ok(())
}

pub fn config(session: &Session) -> Result<()> {
    let mut config = session.config;
    if let Some(mode) = session.mode {
        config = config.with_initial_mode(mode);
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
