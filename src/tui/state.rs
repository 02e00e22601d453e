//! Application state and the interaction events that mutate it.

use ratatui::widgets::ListState;

use crate::data::Dataset;
use crate::select::DisplayMode;
use crate::view::{self, ChartConfigs, GroupView};

/// The display-mode radio: global top ten, or neighbors of a picked country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    TopTen,
    Country,
}

impl Mode {
    /// Display name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::TopTen => "Top 10 countries",
            Mode::Country => "Around a country",
        }
    }
}

/// Active popup. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Country picker.
    Picker,
}

impl PopupState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Country picker state: typeahead filter plus list selection.
#[derive(Debug, Default)]
pub struct PickerState {
    /// Typeahead filter input.
    pub input: String,
    /// Selected index within the filtered list.
    pub selected: usize,
    /// Ratatui list state, synced before each draw for auto-scrolling.
    pub list_state: ListState,
}

impl PickerState {
    /// Resets the picker for a fresh open.
    pub fn reset(&mut self) {
        self.input.clear();
        self.selected = 0;
        self.list_state = ListState::default();
    }

    /// Countries matching the typeahead filter, case-insensitive substring.
    pub fn filtered<'a>(&self, countries: &'a [String]) -> Vec<&'a str> {
        let needle = self.input.to_lowercase();
        countries
            .iter()
            .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self, len: usize) {
        self.selected = (self.selected + 1).min(len.saturating_sub(1));
    }

    /// Clamps the selection after the filter changed and syncs the ratatui
    /// list state.
    pub fn resolve_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// User interactions that change what the dashboard displays.
///
/// Each event triggers a full synchronous recomputation of the rank
/// selection for every displayed indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    ModeChanged(Mode),
    CountrySelected(Option<String>),
}

/// How many redraw ticks a transient status message stays visible.
const STATUS_TICKS: u8 = 12;

/// Main application state.
#[derive(Debug)]
pub struct AppState {
    /// Current display-mode radio position.
    pub mode: Mode,
    /// The country actually chosen in the picker, if any.
    pub selected_country: Option<String>,
    /// Active popup.
    pub popup: PopupState,
    /// Country picker state.
    pub picker: PickerState,
    /// First grid unit currently shown (vertical scroll).
    pub scroll: usize,
    /// Largest useful scroll offset; maintained by the grid widget each
    /// draw.
    pub max_scroll: usize,
    /// Transient status message shown in the header.
    pub status_message: Option<String>,
    status_ticks: u8,
    /// The computed dashboard; replaced on every [`AppEvent`].
    pub display: Vec<GroupView>,
    configs: ChartConfigs,
}

impl AppState {
    pub fn new(dataset: &Dataset, mode: Mode, selected_country: Option<String>) -> Self {
        let mut state = Self {
            mode,
            selected_country,
            popup: PopupState::None,
            picker: PickerState::default(),
            scroll: 0,
            max_scroll: 0,
            status_message: None,
            status_ticks: 0,
            display: Vec::new(),
            configs: ChartConfigs::standard(),
        };
        state.refresh(dataset);
        state
    }

    /// The selector mode implied by the radio position and picker state.
    /// Country mode without an actual selection falls back to the top ten.
    pub fn display_mode(&self) -> DisplayMode<'_> {
        match self.mode {
            Mode::TopTen => DisplayMode::TopTen,
            Mode::Country => DisplayMode::Around(self.selected_country.as_deref()),
        }
    }

    /// Applies a user interaction and recomputes the dashboard.
    pub fn apply_event(&mut self, dataset: &Dataset, event: AppEvent) {
        match event {
            AppEvent::ModeChanged(mode) => self.mode = mode,
            AppEvent::CountrySelected(country) => self.selected_country = country,
        }
        self.refresh(dataset);
    }

    fn refresh(&mut self, dataset: &Dataset) {
        let display = view::build_dashboard(dataset, &self.configs, self.display_mode());
        self.display = display;
    }

    /// Shows a transient message in the header.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Redraw tick: expires the status message.
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.max_scroll);
    }

    pub fn scroll_home(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_end(&mut self) {
        self.scroll = self.max_scroll;
    }
}
