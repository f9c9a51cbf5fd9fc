mod ui;
mod worker;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;
use reelscout_client::OmdbClient;
use reelscout_core::{App, AppEvent, Command};
use reelscout_store::FileStore;
use std::io;
use std::sync::mpsc;
use std::time::Duration;
use worker::{WorkerJob, WorkerReply};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interactive movie lookup widget: live suggestions while typing, a detail
/// panel, and a favorite control, driven entirely through the coordinator.
pub struct Widget {
    app: App<FileStore>,
    jobs: mpsc::Sender<WorkerJob>,
    replies: mpsc::Receiver<WorkerReply>,
    list_state: ListState,
}

impl Widget {
    pub fn new(client: OmdbClient, store: FileStore) -> Result<Self> {
        let (jobs_tx, jobs_rx) = mpsc::channel();
        let (replies_tx, replies_rx) = mpsc::channel();
        std::thread::spawn(move || worker::run_worker(client, jobs_rx, replies_tx));

        Ok(Self {
            app: App::new(store),
            jobs: jobs_tx,
            replies: replies_rx,
            list_state: ListState::default(),
        })
    }

    pub fn run(mut self) -> Result<()> {
        let mut session = TerminalSession::new()?;

        self.process(AppEvent::Started)?;

        loop {
            session.terminal.draw(|frame| {
                ui::draw(frame, &self.app, &mut self.list_state);
            })?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.on_key(key)? {
                        break;
                    }
                }
            }

            while let Ok(reply) = self.replies.try_recv() {
                match reply {
                    WorkerReply::SearchDone { request_id, result } => {
                        self.process(AppEvent::SearchCompleted { request_id, result })?;
                        self.reset_selection();
                    }
                    WorkerReply::LookupDone(result) => {
                        self.process(AppEvent::LookupCompleted(result))?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Dispatch one event through the coordinator and forward the resulting
    /// commands to the network worker.
    fn process(&mut self, app_event: AppEvent) -> Result<()> {
        let commands = self.app.handle(app_event)?;
        for command in commands {
            let job = match command {
                Command::Search { request_id, term } => WorkerJob::Search { request_id, term },
                Command::Lookup { imdb_id } => WorkerJob::Lookup { imdb_id },
            };
            // A closed worker means we are shutting down; nothing to do.
            let _ = self.jobs.send(job);
        }
        Ok(())
    }

    /// Returns `true` when the widget should quit.
    fn on_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => return Ok(true),
                KeyCode::Char('f') => {
                    self.process(AppEvent::FavoritePressed)?;
                    return Ok(false);
                }
                _ => return Ok(false),
            }
        }

        match key.code {
            KeyCode::Esc => {
                if self.app.suggestions().visible {
                    self.process(AppEvent::DismissRequested)?;
                } else {
                    return Ok(true);
                }
            }
            KeyCode::Enter => {
                if let Some(imdb_id) = self.selected_id() {
                    self.process(AppEvent::SuggestionChosen(imdb_id))?;
                }
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Backspace => {
                let mut input = self.app.input().to_string();
                input.pop();
                self.process(AppEvent::InputChanged(input))?;
            }
            KeyCode::Char(c) => {
                let mut input = self.app.input().to_string();
                input.push(c);
                self.process(AppEvent::InputChanged(input))?;
            }
            _ => {}
        }

        Ok(false)
    }

    fn selected_id(&self) -> Option<String> {
        if !self.app.suggestions().visible {
            return None;
        }
        let entries = &self.app.suggestions().entries;
        let index = self.list_state.selected()?;
        entries.get(index).map(|entry| entry.imdb_id.clone())
    }

    fn reset_selection(&mut self) {
        if self.app.suggestions().entries.is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.app.suggestions().entries.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
    }
}

/// Raw-mode terminal on the alternate screen, restored on drop so an error
/// path never leaves the user's shell in a broken state.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        execute!(io::stdout(), terminal::EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen);
    }
}
