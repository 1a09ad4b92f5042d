use crate::model::{ElementRecord, MetricsResult, ModelIndex, NodeId};
use crate::query::resolve_query;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Report,
    Index,
    Search,
}

impl View {
    fn next(self) -> Self {
        match self {
            Self::Report => Self::Index,
            Self::Index => Self::Search,
            Self::Search => Self::Report,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Report => Self::Search,
            Self::Index => Self::Report,
            Self::Search => Self::Index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub model_name: String,
    pub metrics: MetricsResult,
    pub index: ModelIndex,
    pub records: Vec<ElementRecord>,
    pub view: View,
    pub input_mode: InputMode,
    pub search_input: String,
    pub last_query: Option<String>,
    pub results: Vec<NodeId>,
    pub scroll_offset: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        model_name: String,
        metrics: MetricsResult,
        index: ModelIndex,
        records: Vec<ElementRecord>,
    ) -> Self {
        Self {
            model_name,
            metrics,
            index,
            records,
            view: View::Report,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            last_query: None,
            results: Vec::new(),
            scroll_offset: 0,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Report => super::dashboard::draw_report(frame, self),
            View::Index => super::dashboard::draw_index(frame, self),
            View::Search => super::dashboard::draw_search(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                self.handle_key(key.code);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.input_mode {
            InputMode::Editing => self.handle_input_keys(code),
            InputMode::Normal => self.handle_normal_keys(code),
        }
    }

    fn handle_normal_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_view(self.view.next()),
            KeyCode::BackTab => self.switch_view(self.view.previous()),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Char('/') if self.view == View::Search => {
                self.input_mode = InputMode::Editing;
            }
            _ => {}
        }
    }

    fn handle_input_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => {
                self.submit_search();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => self.search_input.push(c),
            _ => {}
        }
    }

    fn switch_view(&mut self, view: View) {
        self.view = view;
        self.scroll_offset = 0;
    }

    fn submit_search(&mut self) {
        let query = self.search_input.trim().to_string();
        self.results = resolve_query(&query, &self.records);
        self.last_query = Some(query);
        self.scroll_offset = 0;
    }

    fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.scrollable_len() {
            self.scroll_offset += 1;
        }
    }

    /// Rows of the list the current view scrolls through.
    #[must_use]
    pub fn scrollable_len(&self) -> usize {
        match self.view {
            View::Report => self.metrics.material_breakdown.len(),
            View::Index => self.index.category_counts.len(),
            View::Search => self.results.len(),
        }
    }

    #[must_use]
    pub fn result_records(&self) -> Vec<&ElementRecord> {
        self.results
            .iter()
            .filter_map(|id| self.records.iter().find(|r| r.id == *id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{build_index, classify, metrics_from_records};
    use crate::model::PropertyBag;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let records: Vec<ElementRecord> = [
            PropertyBag::new("Wall-01").with("Material", "Concrete"),
            PropertyBag::new("Roof-01").with("Material", "Steel"),
            PropertyBag::new("Wall-02").with("Material", "Brick"),
        ]
        .iter()
        .zip(1..)
        .filter_map(|(bag, id)| classify(id, bag))
        .collect();

        App::new(
            "House".into(),
            metrics_from_records(&records),
            build_index(&records),
            records,
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn tab_cycles_views() {
        let mut app = app();
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.view, View::Index);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.view, View::Search);
        app.handle_key(KeyCode::BackTab);
        assert_eq!(app.view, View::Index);
    }

    #[test]
    fn slash_opens_search_input_only_in_search_view() {
        let mut app = app();
        app.handle_key(KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Normal);

        app.view = View::Search;
        app.handle_key(KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn enter_resolves_the_typed_query() {
        let mut app = app();
        app.view = View::Search;
        app.handle_key(KeyCode::Char('/'));
        type_text(&mut app, "murz");
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.last_query.as_deref(), Some("murs"));
        assert_eq!(app.results, vec![1, 3]);
        let names: Vec<&str> = app.result_records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Wall-01", "Wall-02"]);
    }

    #[test]
    fn q_while_typing_is_text_not_quit() {
        let mut app = app();
        app.view = View::Search;
        app.handle_key(KeyCode::Char('/'));
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.search_input, "q");

        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn scrolling_stays_within_the_list() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.scroll_offset, 2);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.scroll_offset, 1);
    }
}
