//! Terminal UI for the digitization wizard.
//!
//! Layout:
//! - Centered window titled "Contract Central — Document Digitization Wizard"
//! - Progress row (✓ complete, ● active, ○ pending)
//! - Step body rendered by the active step view
//! - Footer: "Step N of 4" and the button row [ Previous ] [ Continue ] [ Cancel ]
//! - Modal overlays: exit confirmation, notifications, feedback form
//!
//! Note: Logging is file-only in TUI mode (stdout logging is disabled) to avoid corrupting the terminal UI.

mod admin;
mod deploy;
mod discover;
mod explore;
mod feedback;
mod input;
mod progress;
mod validate;
mod widgets;

use crate::api::feedback::{DiagnosticSink, LogSink};
use crate::config::StartView;
use crate::models::feedback::FeedbackContext;
use crate::models::updates::{DiscoverPatch, SectionUpdate};
use crate::models::wizard_data::{
    AccessRole, BusinessCategory, ConfidentialityLevel, FeatureFlag, IngestionSource, WizardData,
};
use crate::wizard::{editing, Notification, NotificationKind, Step, Transition, WizardController};
use admin::AdminView;
use deploy::DeployView;
use discover::DiscoverView;
use explore::ExploreView;
use feedback::{FeedbackOutcome, FeedbackView};
use validate::ValidateView;
use widgets::{button_text, centered_window, modal_area};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::info;
use ratatui::backend::{CrosstermBackend, TestBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::block::{Position, Title};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const WINDOW_TITLE: &str = "Contract Central — Document Digitization Wizard";
const KEY_HINTS: &str = "Tab: next  Enter: select  F2: feedback  F3: admin  Esc: exit";

/// A wizard page: maps keys on its own section to proposed updates and renders itself.
///
/// Views keep only UI state (cursors, drafts, inline warnings). The wizard data they show is
/// owned by the controller and only changes through the returned [`SectionUpdate`].
pub(crate) trait StepView {
    type Section;

    const FIELD_COUNT: usize;

    fn handle_key(
        &mut self,
        field: usize,
        code: KeyCode,
        section: &Self::Section,
    ) -> Option<SectionUpdate>;

    fn draw(&self, f: &mut Frame<'_>, area: Rect, focus: Option<usize>, data: &WizardData);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Wizard,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonFocus {
    Previous,
    Next,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusTarget {
    Field(usize),
    Button(ButtonFocus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Modal {
    ConfirmExit { confirm: bool },
    Message(Notification),
    Feedback,
}

pub(crate) struct App {
    controller: WizardController,
    route: Route,
    focus: FocusTarget,
    discover: DiscoverView,
    explore: ExploreView,
    validate: ValidateView,
    deploy: DeployView,
    admin: AdminView,
    feedback: FeedbackView,
    sink: Box<dyn DiagnosticSink>,
    modal: Option<Modal>,
    pending: VecDeque<Notification>,
    quit: bool,
}

impl App {
    pub(crate) fn new(start_view: StartView, sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            controller: WizardController::new(),
            route: match start_view {
                StartView::Wizard => Route::Wizard,
                StartView::Admin => Route::Admin,
            },
            focus: FocusTarget::Field(0),
            discover: DiscoverView::default(),
            explore: ExploreView,
            validate: ValidateView::default(),
            deploy: DeployView::default(),
            admin: AdminView::default(),
            feedback: FeedbackView::default(),
            sink,
            modal: None,
            pending: VecDeque::new(),
            quit: false,
        }
    }

    fn field_count(&self) -> usize {
        match self.controller.current_step() {
            Step::Discover => DiscoverView::FIELD_COUNT,
            Step::Explore => ExploreView::FIELD_COUNT,
            Step::Validate => ValidateView::FIELD_COUNT,
            Step::Deploy => DeployView::FIELD_COUNT,
        }
    }

    fn feedback_context(&self) -> FeedbackContext {
        match self.route {
            Route::Admin => FeedbackContext {
                current_screen: Some("Admin Dashboard".to_string()),
                current_feature: Some(self.admin.tab.title().to_string()),
            },
            Route::Wizard => {
                let step = self.controller.current_step();
                FeedbackContext {
                    current_screen: Some(step.label().to_string()),
                    current_feature: Some(step.description().to_string()),
                }
            }
        }
    }

    fn button_enabled(&self, b: ButtonFocus) -> bool {
        match b {
            ButtonFocus::Previous => self.controller.current_step() != Step::Discover,
            ButtonFocus::Next | ButtonFocus::Cancel => true,
        }
    }

    /// Tab order: step fields, then the enabled buttons.
    fn focus_order(&self) -> Vec<FocusTarget> {
        let mut order: Vec<FocusTarget> = (0..self.field_count()).map(FocusTarget::Field).collect();
        for b in [ButtonFocus::Previous, ButtonFocus::Next, ButtonFocus::Cancel] {
            if self.button_enabled(b) {
                order.push(FocusTarget::Button(b));
            }
        }
        order
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let n = order.len();
        let i = order.iter().position(|t| *t == self.focus).unwrap_or(0);
        let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
        self.focus = order[next];
    }

    fn show_pending(&mut self) {
        self.pending.extend(self.controller.take_notifications());
        if self.modal.is_none() {
            if let Some(note) = self.pending.pop_front() {
                self.modal = Some(Modal::Message(note));
            }
        }
    }

    fn activate(&mut self, b: ButtonFocus) {
        if !self.button_enabled(b) {
            return;
        }
        match b {
            ButtonFocus::Previous => {
                if let Transition::Moved { .. } = self.controller.previous() {
                    self.focus = FocusTarget::Field(0);
                }
            }
            ButtonFocus::Next => {
                if let Transition::Moved { .. } = self.controller.next() {
                    self.focus = FocusTarget::Field(0);
                }
            }
            ButtonFocus::Cancel => self.modal = Some(Modal::ConfirmExit { confirm: false }),
        }
    }

    fn dispatch_field_key(&mut self, field: usize, code: KeyCode) {
        let data = self.controller.data();
        let update = match self.controller.current_step() {
            Step::Discover => self.discover.handle_key(field, code, &data.discover),
            Step::Explore => self.explore.handle_key(field, code, &data.explore),
            Step::Validate => self.validate.handle_key(field, code, &data.validate),
            Step::Deploy => self.deploy.handle_key(field, code, &data.deploy),
        };
        if let Some(u) = update {
            self.controller.dispatch(u);
        }
    }

    fn handle_modal_key(&mut self, modal: Modal, code: KeyCode) {
        match modal {
            Modal::ConfirmExit { confirm } => match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    self.modal = Some(Modal::ConfirmExit { confirm: !confirm });
                }
                KeyCode::Enter => {
                    self.modal = None;
                    if confirm {
                        info!("[PHASE: tui] [STEP: exit] User confirmed exit");
                        self.quit = true;
                    }
                }
                KeyCode::Esc => self.modal = None,
                _ => {}
            },
            Modal::Message(_) => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.modal = None;
                    self.show_pending();
                }
            }
            Modal::Feedback => {
                let context = self.feedback_context();
                match self
                    .feedback
                    .handle_key(code, &context, self.sink.as_mut())
                {
                    FeedbackOutcome::Pending => {}
                    FeedbackOutcome::Closed => self.modal = None,
                    FeedbackOutcome::Submitted(note) => self.modal = Some(Modal::Message(note)),
                }
            }
        }
    }

    pub(crate) fn handle_key(&mut self, code: KeyCode) {
        if let Some(modal) = self.modal.clone() {
            self.handle_modal_key(modal, code);
            return;
        }

        match code {
            KeyCode::F(2) => {
                if !self.feedback.is_open() {
                    self.feedback.open();
                }
                self.modal = Some(Modal::Feedback);
                return;
            }
            KeyCode::F(3) => {
                self.route = match self.route {
                    Route::Wizard => Route::Admin,
                    Route::Admin => Route::Wizard,
                };
                info!(
                    "[PHASE: tui] [STEP: route] Switched to {:?}",
                    self.route
                );
                return;
            }
            _ => {}
        }

        if self.route == Route::Admin {
            if code == KeyCode::Esc {
                self.route = Route::Wizard;
            } else {
                self.admin.handle_key(code);
            }
            return;
        }

        match (code, self.focus) {
            (KeyCode::Esc, _) => self.modal = Some(Modal::ConfirmExit { confirm: false }),
            (KeyCode::Tab, _) => self.cycle_focus(true),
            (KeyCode::BackTab, _) => self.cycle_focus(false),
            (KeyCode::Left, FocusTarget::Button(_)) => self.cycle_focus(false),
            (KeyCode::Right, FocusTarget::Button(_)) => self.cycle_focus(true),
            (KeyCode::Enter, FocusTarget::Button(b)) => self.activate(b),
            (_, FocusTarget::Field(i)) => self.dispatch_field_key(i, code),
            _ => {}
        }
        self.show_pending();
    }

    fn draw(&self, f: &mut Frame<'_>) {
        let window = centered_window(f.size(), 100, 30);
        f.render_widget(
            Block::default().borders(Borders::ALL).title(WINDOW_TITLE),
            window,
        );

        let inner = window.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(inner);

        match self.route {
            Route::Wizard => self.draw_wizard(f, rows[0], rows[1], rows[2]),
            Route::Admin => self.draw_admin(f, rows[0], rows[1], rows[2]),
        }

        match &self.modal {
            Some(Modal::ConfirmExit { confirm }) => draw_exit_modal(f, window, *confirm),
            Some(Modal::Message(note)) => draw_message_modal(f, window, note),
            Some(Modal::Feedback) => self.feedback.draw(f, window),
            None => {}
        }
    }

    fn draw_wizard(&self, f: &mut Frame<'_>, header: Rect, body: Rect, footer: Rect) {
        let step = self.controller.current_step();
        f.render_widget(Paragraph::new(progress::progress_line(step)), header);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{}: {}", step.label(), step.description()))
            .title(
                Title::from(KEY_HINTS)
                    .position(Position::Bottom)
                    .alignment(Alignment::Right),
            );
        f.render_widget(block, body);
        let content = body.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });

        let focus = match self.focus {
            FocusTarget::Field(i) => Some(i),
            FocusTarget::Button(_) => None,
        };
        let data = self.controller.data();
        match step {
            Step::Discover => self.discover.draw(f, content, focus, data),
            Step::Explore => self.explore.draw(f, content, focus, data),
            Step::Validate => self.validate.draw(f, content, focus, data),
            Step::Deploy => self.deploy.draw(f, content, focus, data),
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)].as_ref())
            .split(footer);
        f.render_widget(
            Paragraph::new(format!("Step {} of {}", step.number(), Step::ALL.len())),
            cols[0],
        );
        self.draw_buttons(f, cols[1], step);
    }

    fn draw_buttons(&self, f: &mut Frame<'_>, area: Rect, step: Step) {
        let focused = |b: ButtonFocus| self.focus == FocusTarget::Button(b);
        let line = Line::from(vec![
            button_text(
                "Previous",
                focused(ButtonFocus::Previous),
                self.button_enabled(ButtonFocus::Previous),
            ),
            Span::raw(" "),
            button_text(step.next_label(), focused(ButtonFocus::Next), true),
            Span::raw(" "),
            button_text("Cancel", focused(ButtonFocus::Cancel), true),
        ]);
        f.render_widget(
            Paragraph::new(Text::from(line)).alignment(Alignment::Right),
            area,
        );
    }

    fn draw_admin(&self, f: &mut Frame<'_>, header: Rect, body: Rect, footer: Rect) {
        f.render_widget(
            Paragraph::new("Admin Dashboard (read-only)"),
            header,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .title(self.admin.tab.title());
        f.render_widget(block, body);
        self.admin.draw(
            f,
            body.inner(&Margin {
                vertical: 1,
                horizontal: 1,
            }),
        );
        f.render_widget(
            Paragraph::new("Left/Right: switch tab  F2: feedback  F3/Esc: back to wizard"),
            footer,
        );
    }
}

fn draw_exit_modal(f: &mut Frame<'_>, window: Rect, confirm: bool) {
    let area = modal_area(window, 56, 7);
    f.render_widget(Clear, area);
    let body = Paragraph::new(Text::from(vec![
        Line::from("Your configuration is not saved. Exit the wizard?"),
        Line::from(""),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Exit wizard?"))
    .wrap(Wrap { trim: false });
    f.render_widget(body, area);

    let buttons = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(2),
        height: 1,
    };
    let line = Line::from(vec![
        button_text("Yes, exit", confirm, true),
        Span::raw(" "),
        button_text("No", !confirm, true),
    ]);
    f.render_widget(
        Paragraph::new(Text::from(line)).alignment(Alignment::Right),
        buttons,
    );
}

fn draw_message_modal(f: &mut Frame<'_>, window: Rect, note: &Notification) {
    let area = modal_area(window, 64, 8);
    f.render_widget(Clear, area);
    let color = match note.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Destructive => Color::Red,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(note.title.as_str());
    f.render_widget(
        Paragraph::new(note.description.as_str())
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );

    let buttons = Rect {
        x: area.x + 1,
        y: area.y + area.height.saturating_sub(2),
        width: area.width.saturating_sub(2),
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Text::from(Line::from(button_text("OK", true, true))))
            .alignment(Alignment::Right),
        buttons,
    );
}

pub fn run(start_view: StartView) -> Result<()> {
    info!("[PHASE: tui] [STEP: start] Starting TUI wizard");

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, start_view);
    restore_terminal(&mut terminal)?;

    result
}

/// Seeded app for single-frame rendering. Interactive runs never use this.
fn new_smoke_app(target: &str) -> Result<App> {
    let mut app = App::new(StartView::Wizard, Box::new(LogSink));
    app.controller.dispatch(
        DiscoverPatch {
            project_name: Some("Q1 Audit".to_string()),
            business_category: Some(BusinessCategory::Legal),
            ingestion_source: Some(IngestionSource::Upload),
            confidentiality_level: Some(ConfidentialityLevel::Internal),
            ..Default::default()
        }
        .into(),
    );
    let dm = app.controller.data().discover.dataset_manager.clone();
    if let Some(p) = editing::add_keyword_flag(&dm, "Force Majeure") {
        app.controller.dispatch(p.into());
    }

    let steps = match target {
        "discover" => 0,
        "explore" => 1,
        "validate" => 2,
        "deploy" => 3,
        "admin" => {
            app.route = Route::Admin;
            0
        }
        "feedback" => {
            app.feedback.open();
            app.modal = Some(Modal::Feedback);
            0
        }
        other => anyhow::bail!(
            "Unknown smoke target '{}' (expected discover|explore|validate|deploy|admin|feedback)",
            other
        ),
    };
    for _ in 0..steps {
        app.controller.next();
    }

    if target == "explore" {
        let patch =
            editing::toggle_feature(&app.controller.data().explore, FeatureFlag::TableExtraction);
        app.controller.dispatch(patch.into());
    }
    if target == "deploy" {
        let d = app.controller.data().deploy.clone();
        app.controller.dispatch(editing::toggle_user(&d, "1").into());
        let d = app.controller.data().deploy.clone();
        if let Some(p) = editing::set_user_role(&d, "1", AccessRole::Edit) {
            app.controller.dispatch(p.into());
        }
    }
    app.focus = FocusTarget::Button(ButtonFocus::Next);
    Ok(app)
}

pub fn smoke(target: &str) -> Result<()> {
    info!(
        "[PHASE: tui] [STEP: smoke] Rendering single-frame TUI smoke target={}",
        target
    );

    let t = target.trim().to_ascii_lowercase();
    let app = new_smoke_app(t.as_str())?;

    // In-memory backend: no raw mode or alternate screen.
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| app.draw(f))?;

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    start_view: StartView,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();
    let mut app = App::new(start_view, Box::new(LogSink));

    while !app.quit {
        terminal.draw(|f| app.draw(f))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_millis(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    info!(
        "[PHASE: tui] [STEP: exit] Wizard closed after {} deploy acknowledgment(s)",
        app.controller.deployments()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedback::FeedbackRecord;

    #[derive(Default)]
    struct NullSink;

    impl DiagnosticSink for NullSink {
        fn record(&mut self, _record: &FeedbackRecord) {}
    }

    fn app() -> App {
        App::new(StartView::Wizard, Box::new(NullSink))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.get(x, y).symbol());
            }
            out.push('\n');
        }
        out
    }

    fn press_next(app: &mut App) {
        app.focus = FocusTarget::Button(ButtonFocus::Next);
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn first_frame_shows_step_one_and_continue() {
        let screen = render(&app());
        assert!(screen.contains("Step 1 of 4"), "{}", screen);
        assert!(screen.contains("[ Continue ]"), "{}", screen);
        assert!(screen.contains("● 1 Discover"), "{}", screen);
        assert!(screen.contains("Identity & Data Source"), "{}", screen);
    }

    #[test]
    fn last_step_labels_deploy_and_acknowledges_each_press() {
        let mut app = app();
        for _ in 0..3 {
            press_next(&mut app);
        }
        let screen = render(&app);
        assert!(screen.contains("Step 4 of 4"), "{}", screen);
        assert!(screen.contains("[ Deploy Project ]"), "{}", screen);

        press_next(&mut app);
        assert_eq!(app.controller.current_step(), Step::Deploy);
        assert_eq!(app.modal, Some(Modal::Message(Notification::deployed())));
        assert!(render(&app).contains("Project Deployed Successfully!"));

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.modal, None);
        press_next(&mut app);
        assert_eq!(app.controller.deployments(), 2);
    }

    #[test]
    fn previous_is_skipped_in_tab_order_on_first_step() {
        let app = app();
        assert!(!app
            .focus_order()
            .contains(&FocusTarget::Button(ButtonFocus::Previous)));
    }

    #[test]
    fn tab_walks_fields_then_buttons() {
        let mut app = app();
        for _ in 0..DiscoverView::FIELD_COUNT {
            app.handle_key(KeyCode::Tab);
        }
        assert_eq!(app.focus, FocusTarget::Button(ButtonFocus::Next));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, FocusTarget::Button(ButtonFocus::Cancel));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, FocusTarget::Field(0));
    }

    #[test]
    fn typing_goes_through_controller() {
        let mut app = app();
        for c in "Q1 Audit".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.controller.data().discover.project_name, "Q1 Audit");
        assert!(render(&app).contains("Q1 Audit"));
    }

    #[test]
    fn esc_asks_before_exiting() {
        let mut app = app();
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.modal, Some(Modal::ConfirmExit { confirm: false }));
        app.handle_key(KeyCode::Enter);
        assert!(!app.quit, "default answer is No");

        app.handle_key(KeyCode::Esc);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        assert!(app.quit);
    }

    #[test]
    fn f3_toggles_admin_without_touching_wizard_data() {
        let mut app = app();
        let before = app.controller.state().clone();
        app.handle_key(KeyCode::F(3));
        assert_eq!(app.route, Route::Admin);
        assert!(render(&app).contains("Billing & Token Usage"));
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.route, Route::Wizard);
        assert_eq!(*app.controller.state(), before);
    }

    #[test]
    fn feedback_modal_blocks_empty_and_thanks_on_success() {
        let mut app = app();
        app.handle_key(KeyCode::F(2));
        assert_eq!(app.modal, Some(Modal::Feedback));

        // Type, Category, Severity, Description
        for _ in 0..3 {
            app.handle_key(KeyCode::Tab);
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::Feedback));
        assert!(render(&app).contains("Description required"));

        for c in "Broken".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        match &app.modal {
            Some(Modal::Message(note)) => assert_eq!(note.title, "Thank you!"),
            other => panic!("expected thank-you message, got {:?}", other),
        }
        assert_eq!(app.controller.current_step(), Step::Discover);
    }

    #[test]
    fn every_smoke_target_renders() {
        for target in ["discover", "explore", "validate", "deploy", "admin", "feedback"] {
            let app = new_smoke_app(target).unwrap();
            let screen = render(&app);
            assert!(screen.contains(WINDOW_TITLE), "{}: {}", target, screen);
        }
        assert!(new_smoke_app("welcome").is_err());
    }
}
