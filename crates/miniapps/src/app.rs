#![forbid(unsafe_code)]

//! The top-level application model.
//!
//! One screen is visible at a time; the chrome owns screen switching, the
//! theme toggle, and the nav state. Global bindings are handled here and
//! never reach the screens, so digit keys stay free for the quiz and
//! password toggles while an input field is focused elsewhere.

use std::io;
use std::time::Duration;

use miniapps_core::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use miniapps_core::geometry::Rect;
use miniapps_core::surface::Surface;
use miniapps_runtime::{Cmd, Every, Model, StateStore, SubId, Subscription};

use crate::chrome;
use crate::screens::calculator::Calculator;
use crate::screens::clock::ClockScreen;
use crate::screens::password::Password;
use crate::screens::quiz::QuizScreen;
use crate::screens::todo::Todo;
use crate::screens::word_count::WordCount;
use crate::screens::{HelpEntry, Screen};
use crate::theme::{Palette, THEME_KEY, ThemeFlag};

/// Subscription id for the once-per-second clock tick.
const CLOCK_SUB_ID: SubId = 1;

/// Application messages.
pub enum Msg {
    /// A terminal event from the input thread.
    Term(Event),
    /// One second elapsed on the clock ticker.
    Tick,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Self::Term(event)
    }
}

/// Identifier for each screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Basic calculator.
    Calculator,
    /// To-do list.
    Todo,
    /// Word counter.
    WordCount,
    /// Password generator.
    Password,
    /// Quiz.
    Quiz,
    /// Digital clock.
    Clock,
}

impl ScreenId {
    /// All screens in tab order.
    pub const ALL: [Self; 6] = [
        Self::Calculator,
        Self::Todo,
        Self::WordCount,
        Self::Password,
        Self::Quiz,
        Self::Clock,
    ];

    /// Position in tab order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Screen from a tab-order position, wrapping.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// The next screen in tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The previous screen in tab order, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

/// Owned state for every screen; all six live for the whole session.
#[derive(Default)]
struct ScreenStates {
    calculator: Calculator,
    todo: Todo,
    word_count: WordCount,
    password: Password,
    quiz: QuizScreen,
    clock: ClockScreen,
}

/// The application model.
pub struct AppModel {
    current: ScreenId,
    screens: ScreenStates,
    theme: ThemeFlag,
    store: StateStore,
    nav_expanded: bool,
    toast: Option<String>,
}

impl AppModel {
    /// Build the model, restoring the persisted theme before first render.
    #[must_use]
    pub fn new(store: StateStore) -> Self {
        let theme = ThemeFlag::parse(store.get(THEME_KEY));
        Self {
            current: ScreenId::Calculator,
            screens: ScreenStates::default(),
            theme,
            store,
            nav_expanded: false,
            toast: None,
        }
    }

    /// Jump straight to a screen (startup option).
    pub fn set_screen(&mut self, id: ScreenId) {
        self.current = id;
        self.toast = None;
    }

    /// Current screen id.
    #[must_use]
    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Active theme.
    #[must_use]
    pub fn theme(&self) -> ThemeFlag {
        self.theme
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            tracing::warn!(error = %e, "failed to persist theme");
            self.toast = Some("Não foi possível salvar o tema.".to_string());
        }
    }

    fn dispatch_key(&mut self, key: &KeyEvent) -> Option<String> {
        match self.current {
            ScreenId::Calculator => self.screens.calculator.update(key),
            ScreenId::Todo => self.screens.todo.update(key),
            ScreenId::WordCount => self.screens.word_count.update(key),
            ScreenId::Password => self.screens.password.update(key),
            ScreenId::Quiz => self.screens.quiz.update(key),
            ScreenId::Clock => self.screens.clock.update(key),
        }
    }

    fn wants_text_input(&self) -> bool {
        match self.current {
            ScreenId::Calculator => self.screens.calculator.wants_text_input(),
            ScreenId::Todo => self.screens.todo.wants_text_input(),
            ScreenId::WordCount => self.screens.word_count.wants_text_input(),
            ScreenId::Password => self.screens.password.wants_text_input(),
            ScreenId::Quiz => self.screens.quiz.wants_text_input(),
            ScreenId::Clock => self.screens.clock.wants_text_input(),
        }
    }

    fn keybindings(&self) -> Vec<HelpEntry> {
        match self.current {
            ScreenId::Calculator => self.screens.calculator.keybindings(),
            ScreenId::Todo => self.screens.todo.keybindings(),
            ScreenId::WordCount => self.screens.word_count.keybindings(),
            ScreenId::Password => self.screens.password.keybindings(),
            ScreenId::Quiz => self.screens.quiz.keybindings(),
            ScreenId::Clock => self.screens.clock.keybindings(),
        }
    }

    fn title(&self) -> &'static str {
        match self.current {
            ScreenId::Calculator => self.screens.calculator.title(),
            ScreenId::Todo => self.screens.todo.title(),
            ScreenId::WordCount => self.screens.word_count.title(),
            ScreenId::Password => self.screens.password.title(),
            ScreenId::Quiz => self.screens.quiz.title(),
            ScreenId::Clock => self.screens.clock.title(),
        }
    }

    fn tab_labels(&self) -> [&'static str; 6] {
        [
            self.screens.calculator.tab_label(),
            self.screens.todo.tab_label(),
            self.screens.word_count.tab_label(),
            self.screens.password.tab_label(),
            self.screens.quiz.tab_label(),
            self.screens.clock.tab_label(),
        ]
    }

    fn view_screen(
        &self,
        surface: &mut Surface<&mut dyn io::Write>,
        area: Rect,
        palette: &Palette,
    ) -> io::Result<()> {
        match self.current {
            ScreenId::Calculator => self.screens.calculator.view(surface, area, palette),
            ScreenId::Todo => self.screens.todo.view(surface, area, palette),
            ScreenId::WordCount => self.screens.word_count.view(surface, area, palette),
            ScreenId::Password => self.screens.password.view(surface, area, palette),
            ScreenId::Quiz => self.screens.quiz.view(surface, area, palette),
            ScreenId::Clock => self.screens.clock.view(surface, area, palette),
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Cmd<Msg> {
        // Repeats act like presses (held backspace keeps deleting).
        if matches!(key.kind, KeyEventKind::Release) {
            return Cmd::None;
        }
        if key.ctrl() {
            match key.code {
                KeyCode::Char('c') => return Cmd::Quit,
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    return Cmd::None;
                }
                KeyCode::Char('n') => {
                    self.nav_expanded = !self.nav_expanded;
                    return Cmd::None;
                }
                _ => return Cmd::None,
            }
        }
        match key.code {
            KeyCode::Tab => {
                self.set_screen(self.current.next());
                return Cmd::None;
            }
            KeyCode::BackTab => {
                self.set_screen(self.current.prev());
                return Cmd::None;
            }
            KeyCode::Esc => {
                self.toast = None;
                self.nav_expanded = false;
                return Cmd::None;
            }
            KeyCode::Char('q') if !self.wants_text_input() => return Cmd::Quit,
            _ => {}
        }
        if let Some(toast) = self.dispatch_key(key) {
            self.toast = Some(toast);
        }
        Cmd::None
    }
}

impl Model for AppModel {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Term(Event::Key(key)) => self.handle_key(&key),
            Msg::Term(Event::Resize { .. }) => Cmd::None,
            Msg::Tick => {
                self.screens.clock.tick();
                Cmd::None
            }
        }
    }

    fn view(&self, surface: &mut Surface<&mut dyn io::Write>, area: Rect) -> io::Result<()> {
        let palette = Palette::for_theme(self.theme);
        surface.fill(area, palette.body())?;
        let layout = chrome::layout(area);
        chrome::render_nav(
            surface,
            layout.nav,
            &self.tab_labels(),
            self.title(),
            self.current.index(),
            self.nav_expanded,
            palette,
        )?;
        self.view_screen(surface, layout.body, palette)?;
        chrome::render_status(
            surface,
            layout.status,
            &self.keybindings(),
            self.theme,
            self.toast.as_deref(),
            palette,
        )
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
        if self.screens.clock.is_running() {
            vec![Box::new(Every::new(
                CLOCK_SUB_ID,
                Duration::from_secs(1),
                || Msg::Tick,
            ))]
        } else {
            vec![]
        }
    }
}
