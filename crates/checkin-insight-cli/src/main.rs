use anyhow::Result;
use checkin_insight_config::Config;
use checkin_insight_engine::{
    Block as ReportBlock, HeadingCategory, ParsedReport, Span as ReportSpan, io, parse_report,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

struct App {
    reports_path: PathBuf,
    report_files: Vec<PathBuf>,
    file_list_state: ListState,
    content: Vec<Line<'static>>,
}

impl App {
    fn new(reports_path: PathBuf) -> Result<Self> {
        let report_files = io::scan_report_files(&reports_path)?;

        let mut app = Self {
            reports_path,
            report_files,
            file_list_state: ListState::default(),
            content: Vec::new(),
        };

        // Select first report if available
        if !app.report_files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_report(&mut self) {
        if self.report_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.report_files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_report(&mut self) {
        if self.report_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.report_files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(path) = self.report_files.get(index)
        {
            match io::read_report(path) {
                Ok(text) => {
                    let report = parse_report(&text);
                    self.content = render_report(&report);
                }
                Err(e) => {
                    self.content = vec![Line::from(format!("Error reading report: {e}"))];
                }
            }
        }
    }

    fn display_name(&self, path: &Path) -> String {
        path.strip_prefix(&self.reports_path)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Maps a parsed report onto styled terminal lines, one line per block.
///
/// Only the semantic distinctions the engine guarantees are styled here:
/// heading category, bullet nesting, and the key/tail split.
fn render_report(report: &ParsedReport) -> Vec<Line<'static>> {
    report.blocks.iter().map(render_block).collect()
}

fn render_block(block: &ReportBlock) -> Line<'static> {
    match block {
        ReportBlock::Spacer => Line::default(),
        ReportBlock::Divider => Line::from(Span::styled(
            "─".repeat(40),
            Style::default().fg(Color::DarkGray),
        )),
        ReportBlock::Heading { category, spans } => {
            let accent = match category {
                HeadingCategory::Strategic => Color::Green,
                HeadingCategory::Normal => Color::Cyan,
            };
            let mut parts = Vec::new();
            if *category == HeadingCategory::Strategic {
                parts.push(Span::styled("▌ ", Style::default().fg(accent)));
            }
            parts.extend(styled_spans(
                spans,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
            Line::from(parts)
        }
        ReportBlock::NumberedItem { number, spans } => {
            let mut parts = vec![Span::styled(
                format!("  {number}. "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )];
            parts.extend(styled_spans(spans, Style::default()));
            Line::from(parts)
        }
        ReportBlock::BulletItem { nested, key, spans } => {
            let marker = if *nested {
                Span::styled("    ◦ ", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled("  • ", Style::default().fg(Color::Blue))
            };
            let mut parts = vec![marker];
            if let Some(key_spans) = key {
                parts.extend(styled_spans(
                    key_spans,
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                parts.push(Span::raw(":"));
            }
            parts.extend(styled_spans(spans, Style::default()));
            Line::from(parts)
        }
        ReportBlock::Paragraph { spans } => Line::from(styled_spans(spans, Style::default())),
    }
}

fn styled_spans(spans: &[ReportSpan], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            ReportSpan::Text(text) => Span::styled(text.clone(), base),
            ReportSpan::Emphasis(text) => {
                Span::styled(text.clone(), base.add_modifier(Modifier::BOLD))
            }
            ReportSpan::Identifier(text) => {
                Span::styled(text.clone(), Style::default().fg(Color::Magenta))
            }
        })
        .collect()
}

fn main() -> Result<()> {
    // Determine reports path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let reports_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        reports_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                reports_path = config.reports_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No reports path provided and no config file found");
                eprintln!("Usage: {} <reports-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <reports-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [reports-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate reports directory using engine
    if let Err(e) = io::validate_reports_dir(&reports_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Reports path '{}'{} is invalid: {e}",
            reports_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(reports_path)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_report(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_report(),
                KeyCode::Char('r') => app.update_content_for_selection(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(outer[0]);

    // Report list panel
    let report_items: Vec<ListItem> = app
        .report_files
        .iter()
        .map(|path| ListItem::new(Line::from(app.display_name(path))))
        .collect();

    let report_list = List::new(report_items)
        .block(Block::default().borders(Borders::ALL).title("Reports"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(report_list, chunks[0], &mut app.file_list_state);

    // Analysis panel
    let content_text = if app.content.is_empty() {
        vec![Line::from("Select a report to view its analysis")]
    } else {
        app.content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Analyst Insight"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help = Paragraph::new(Line::from(
        "q: Quit | ↑/k: Previous | ↓/j: Next | r: Reload",
    ));
    f.render_widget(help, outer[1]);
}
