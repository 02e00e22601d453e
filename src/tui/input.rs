//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::Dataset;

use super::state::{AppEvent, AppState, Mode, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, dataset: &Dataset, key: KeyEvent) -> KeyAction {
    match state.popup {
        PopupState::QuitConfirm => handle_quit_confirm(state, key),
        PopupState::Picker => handle_picker(state, dataset, key),
        PopupState::Help { .. } => handle_help(state, key),
        PopupState::None => handle_normal(state, dataset, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

/// Keys inside the country picker: typeahead filter plus list navigation.
fn handle_picker(state: &mut AppState, dataset: &Dataset, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Esc => {
            // Mode stays on "country"; without a chosen country the charts
            // keep showing the top ten.
            state.popup = PopupState::None;
            KeyAction::None
        }
        KeyCode::Enter => {
            let filtered = state.picker.filtered(dataset.countries());
            if let Some(country) = filtered.get(state.picker.selected) {
                let country = country.to_string();
                state.popup = PopupState::None;
                state.apply_event(dataset, AppEvent::CountrySelected(Some(country)));
            }
            KeyAction::None
        }
        KeyCode::Up => {
            state.picker.select_up();
            KeyAction::None
        }
        KeyCode::Down => {
            let len = state.picker.filtered(dataset.countries()).len();
            state.picker.select_down(len);
            KeyAction::None
        }
        KeyCode::Backspace => {
            state.picker.input.pop();
            state.picker.selected = 0;
            KeyAction::None
        }
        KeyCode::Char(ch) => {
            state.picker.input.push(ch);
            state.picker.selected = 0;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('H') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        _ => {}
    }
    KeyAction::None
}

/// Keys in normal mode.
fn handle_normal(state: &mut AppState, dataset: &Dataset, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Mode radio: top ten / around a country
        KeyCode::Char('t') | KeyCode::Char('T') => {
            state.apply_event(dataset, AppEvent::ModeChanged(Mode::TopTen));
            KeyAction::None
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            state.apply_event(dataset, AppEvent::ModeChanged(Mode::Country));
            state.picker.reset();
            state.popup = PopupState::Picker;
            KeyAction::None
        }

        // Reopen the picker while in country mode
        KeyCode::Enter => {
            if state.mode == Mode::Country {
                state.picker.reset();
                state.popup = PopupState::Picker;
            }
            KeyAction::None
        }

        // Clear the country selection
        KeyCode::Char('x') | KeyCode::Delete => {
            if state.selected_country.is_some() {
                state.apply_event(dataset, AppEvent::CountrySelected(None));
                state.set_status("Selection cleared, showing top 10");
            }
            KeyAction::None
        }

        // Grid scrolling
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up(1);
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down(1);
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.scroll_up(3);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.scroll_down(3);
            KeyAction::None
        }
        KeyCode::Home => {
            state.scroll_home();
            KeyAction::None
        }
        KeyCode::End => {
            state.scroll_end();
            KeyAction::None
        }

        // Help popup
        KeyCode::Char('?') | KeyCode::Char('H') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Group, GroupLayout, IndicatorMeta, IndicatorRow, IndicatorTable};
    use std::collections::HashMap;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dataset() -> Dataset {
        let rows: Vec<IndicatorRow> = (1_u32..=12)
            .map(|rank| IndicatorRow {
                country: format!("C{}", rank),
                value: f64::from((13 - rank) * 10),
                rank,
                country_with_rank: format!("{}. C{}", rank, rank),
            })
            .collect();
        let table = IndicatorTable {
            name: "GDP".to_string(),
            rows,
        };
        let tables = HashMap::from([(table.name.clone(), table)]);
        let metadata = HashMap::from([(
            "GDP".to_string(),
            IndicatorMeta {
                indicator: "GDP".to_string(),
                group: Group::Economy,
                source: "World Bank".to_string(),
                year: "2023".to_string(),
                uom: "US$".to_string(),
                min_value: 0.0,
                max_value: 150.0,
            },
        )]);
        let layout = vec![GroupLayout {
            group: Group::Economy,
            indicators: vec!["GDP".to_string()],
        }];
        let countries = (1_u32..=12).map(|i| format!("C{}", i)).collect();
        Dataset::new(tables, metadata, layout, countries)
    }

    #[test]
    fn quit_goes_through_the_confirm_popup() {
        let dataset = dataset();
        let mut state = AppState::new(&dataset, Mode::default(), None);

        assert_eq!(handle_key(&mut state, &dataset, key(KeyCode::Char('q'))), KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        assert_eq!(handle_key(&mut state, &dataset, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);

        handle_key(&mut state, &dataset, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, &dataset, key(KeyCode::Enter)), KeyAction::Quit);
    }

    #[test]
    fn country_mode_opens_the_picker_and_enter_selects() {
        let dataset = dataset();
        let mut state = AppState::new(&dataset, Mode::default(), None);

        handle_key(&mut state, &dataset, key(KeyCode::Char('c')));
        assert_eq!(state.mode, Mode::Country);
        assert_eq!(state.popup, PopupState::Picker);

        // Typeahead narrows the list to C1, C10, C11, C12; pick C10.
        handle_key(&mut state, &dataset, key(KeyCode::Char('1')));
        handle_key(&mut state, &dataset, key(KeyCode::Down));
        handle_key(&mut state, &dataset, key(KeyCode::Enter));

        assert_eq!(state.popup, PopupState::None);
        assert_eq!(state.selected_country.as_deref(), Some("C10"));
    }

    #[test]
    fn escape_keeps_country_mode_without_a_selection() {
        let dataset = dataset();
        let mut state = AppState::new(&dataset, Mode::default(), None);

        handle_key(&mut state, &dataset, key(KeyCode::Char('c')));
        handle_key(&mut state, &dataset, key(KeyCode::Esc));

        assert_eq!(state.mode, Mode::Country);
        assert_eq!(state.selected_country, None);
        // Falls back to the top ten.
        assert_eq!(state.display[0].charts[0].bars.len(), 10);
    }

    #[test]
    fn clearing_the_selection_restores_top_ten() {
        let dataset = dataset();
        let mut state = AppState::new(&dataset, Mode::Country, Some("C12".to_string()));

        handle_key(&mut state, &dataset, key(KeyCode::Char('x')));
        assert_eq!(state.selected_country, None);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn top_ten_key_switches_back() {
        let dataset = dataset();
        let mut state = AppState::new(&dataset, Mode::Country, Some("C12".to_string()));

        handle_key(&mut state, &dataset, key(KeyCode::Char('t')));
        assert_eq!(state.mode, Mode::TopTen);
        assert_eq!(state.display[0].charts[0].bars[0].label, "1. C1");
    }

    #[test]
    fn help_opens_and_escape_closes() {
        let dataset = dataset();
        let mut state = AppState::new(&dataset, Mode::default(), None);

        handle_key(&mut state, &dataset, key(KeyCode::Char('?')));
        assert!(matches!(state.popup, PopupState::Help { .. }));

        handle_key(&mut state, &dataset, key(KeyCode::Down));
        assert!(matches!(state.popup, PopupState::Help { scroll: 1 }));

        handle_key(&mut state, &dataset, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }
}
