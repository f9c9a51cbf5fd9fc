use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use reelscout_core::{App, DetailPanelView, PosterView, SuggestionListView};
use reelscout_store::FileStore;

pub(crate) fn draw(frame: &mut Frame, app: &App<FileStore>, list_state: &mut ListState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_input(frame, rows[0], app.input());

    if app.suggestions().visible {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);
        draw_suggestions(frame, body[0], app.suggestions(), list_state);
        draw_detail(frame, body[1], app.detail());
    } else {
        draw_detail(frame, rows[1], app.detail());
    }

    draw_footer(frame, rows[2]);
}

fn draw_input(frame: &mut Frame, area: Rect, input: &str) {
    let block = Block::default().borders(Borders::ALL).title("Search");
    let paragraph = Paragraph::new(input).block(block);
    frame.render_widget(paragraph, area);

    // Keep the cursor at the end of the typed text.
    let x = area.x + 1 + input.chars().count() as u16;
    frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn draw_suggestions(
    frame: &mut Frame,
    area: Rect,
    suggestions: &SuggestionListView,
    list_state: &mut ListState,
) {
    let items: Vec<ListItem> = suggestions
        .entries
        .iter()
        .map(|entry| {
            let mut spans = vec![
                Span::styled(
                    entry.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" ({})", entry.year)),
            ];
            if entry.poster == PosterView::Placeholder {
                spans.push(Span::styled(
                    " [no poster]",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Matches"))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, list_state);
}

fn draw_detail(frame: &mut Frame, area: Rect, detail: &DetailPanelView) {
    let block = Block::default().borders(Borders::ALL).title("Details");

    let lines: Vec<Line> = match detail {
        DetailPanelView::Empty => vec![Line::from("Type a title to start searching.")],
        DetailPanelView::NotFound(reason) => vec![Line::from(vec![
            Span::styled("Not found: ", Style::default().fg(Color::Red)),
            Span::raw(reason.clone()),
        ])],
        DetailPanelView::Movie(view) => {
            let poster = match &view.poster {
                PosterView::Url(url) => url.clone(),
                PosterView::Placeholder => "(no poster)".to_string(),
            };
            vec![
                Line::from(Span::styled(
                    format!("{} ({})", view.title, view.year),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(format!("Rated:    {}", view.rated)),
                Line::from(format!("Released: {}", view.released)),
                Line::from(format!("Genre:    {}", view.genre)),
                Line::from(format!("Writer:   {}", view.writer)),
                Line::from(format!("Actors:   {}", view.actors)),
                Line::from(format!("Language: {}", view.language)),
                Line::from(format!("Awards:   {}", view.awards)),
                Line::from(format!("Poster:   {}", poster)),
                Line::from(""),
                Line::from(view.plot.clone()),
                Line::from(""),
                Line::from(Span::styled(
                    format!("[ {} ]  (ctrl-f)", view.favorite.as_str()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )),
            ]
        }
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(
        "type to search | up/down select | enter view | ctrl-f favorite | esc dismiss/quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}
