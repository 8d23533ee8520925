use std::path::Path;

use scrawl_core::models::FONT_FAMILIES;
use scrawl_core::{Notice, Settings, SettingsStore};

use crate::cli::{FontStep, SettingsCommands, ThemeMode};
use crate::commands::common::{open_storage, print_notice};
use crate::error::CliError;

pub fn run_settings(command: Option<&SettingsCommands>, db_path: &Path) -> Result<(), CliError> {
    let storage = open_storage(db_path)?;
    let mut store = SettingsStore::open(&storage);

    match command {
        None => print_settings(store.settings()),
        Some(SettingsCommands::Show { json }) => {
            if *json {
                println!("{}", serde_json::to_string_pretty(store.settings())?);
            } else {
                print_settings(store.settings());
            }
        }
        Some(SettingsCommands::Theme { mode }) => {
            let settings = store.set_dark_mode(matches!(mode, ThemeMode::Dark))?;
            print_notice(&Notice::dark_mode(settings.dark_mode));
        }
        Some(SettingsCommands::Font { step }) => {
            let before = store.settings().font_size_value;
            let settings = match step {
                FontStep::Bigger => store.increase_font_size()?,
                FontStep::Smaller => store.decrease_font_size()?,
            };
            if settings.font_size_value == before {
                println!(
                    "Font size is already at {} ({}px)",
                    settings.font_size, settings.font_size_value
                );
            } else {
                print_notice(&Notice::font_size_changed(settings.font_size));
            }
        }
        Some(SettingsCommands::FontFamily { family }) => {
            let family = family.trim();
            if family.is_empty() {
                return Err(CliError::Config("font family cannot be empty".to_string()));
            }
            if !FONT_FAMILIES.contains(&family) {
                tracing::warn!("{family} is not one of the bundled font stacks");
            }
            let settings = store.set_font_family(family)?;
            print_notice(&Notice::font_family_changed(&settings));
        }
        Some(SettingsCommands::Autosave { state }) => {
            let settings = store.set_auto_save(state.is_on())?;
            print_notice(&Notice::auto_save(settings.auto_save));
        }
        Some(SettingsCommands::Reset) => {
            store.reset()?;
            print_notice(&Notice::settings_reset());
        }
    }

    Ok(())
}

pub fn format_settings_lines(settings: &Settings) -> Vec<String> {
    let on_off = |enabled: bool| if enabled { "on" } else { "off" };
    vec![
        format!("Theme:       {}", if settings.dark_mode { "dark" } else { "light" }),
        format!(
            "Font size:   {} ({}px)",
            settings.font_size, settings.font_size_value
        ),
        format!("Font family: {}", settings.font_family),
        format!("Auto-save:   {}", on_off(settings.auto_save)),
    ]
}

fn print_settings(settings: &Settings) {
    for line in format_settings_lines(settings) {
        println!("{line}");
    }
}
