use crate::calendar::Calendar;
use crate::form::{FormInput, FormOutput, FormState, NutritionForm};
use crate::help::{Help, CALENDAR_KEYS, FORM_KEYS};
use crate::plan::MealPlan;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};
use time::Date;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    today: Date,
    state: AppState,
    helping: bool,
}

impl App {
    pub(crate) fn new(today: Date) -> App {
        App {
            today,
            state: AppState::Form(FormState::new()),
            helping: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.quit();
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        if self.helping {
            self.helping = false;
            return true;
        }
        if key == KeyCode::Char('?') {
            self.helping = true;
            return true;
        }
        match &mut self.state {
            AppState::Form(form) => {
                let input = match key {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        self.quit();
                        return true;
                    }
                    KeyCode::Char(c @ '0'..='9') => {
                        let Some(d) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) else {
                            return false;
                        };
                        FormInput::Digit(d)
                    }
                    KeyCode::Backspace | KeyCode::Delete => FormInput::Backspace,
                    KeyCode::Tab | KeyCode::Down => FormInput::Next,
                    KeyCode::BackTab | KeyCode::Up => FormInput::Previous,
                    KeyCode::Left => FormInput::Left,
                    KeyCode::Right => FormInput::Right,
                    KeyCode::Enter => FormInput::Enter,
                    _ => return false,
                };
                match form.handle_input(input) {
                    FormOutput::Ok | FormOutput::Incomplete => true,
                    FormOutput::Invalid => false,
                    FormOutput::Submit(profile) => {
                        let plan = MealPlan::new(profile, self.today);
                        tracing::info!(
                            diet = profile.diet.key(),
                            recipes = ?plan.recipes().map(|r| r.id),
                            "showing meal plan"
                        );
                        self.state = AppState::Calendar(plan);
                        true
                    }
                }
            }
            AppState::Calendar(plan) => match key {
                KeyCode::Char('h' | 'k') | KeyCode::Left | KeyCode::Up | KeyCode::PageUp => {
                    plan.previous_week().is_ok()
                }
                KeyCode::Char('l' | 'j') | KeyCode::Right | KeyCode::Down | KeyCode::PageDown => {
                    plan.next_week().is_ok()
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    plan.this_week();
                    true
                }
                KeyCode::Char('n') => {
                    tracing::info!(
                        week_offset = plan.week_offset(),
                        "discarding meal plan for a new one"
                    );
                    self.state = AppState::Form(FormState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.quit();
                    true
                }
                _ => false,
            },
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quit(&mut self) {
        self.state = AppState::Quitting;
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let keys = match self.state {
            AppState::Form(ref mut form) => {
                NutritionForm.render(area, buf, form);
                FORM_KEYS
            }
            AppState::Calendar(ref plan) => {
                Calendar::new(plan).render(area, buf);
                CALENDAR_KEYS
            }
            AppState::Quitting => return,
        };
        if self.helping {
            Help(keys).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Form(FormState),
    Calendar(MealPlan),
    Quitting,
}
