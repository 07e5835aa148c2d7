//! storefront-terminal-ui: Ratatui storefront. Product list with category,
//! search, and sort controls plus a cart pane, keyboard-driven.
//! Keys: / search, Esc done, left/right category, s sort, up/down move,
//! Enter add, d remove, c cart, q quit.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;
use storefront_core::{StoreConfig, StoreSession};
use storefront_terminal_ui::TerminalApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[storefront-terminal-ui] .env not loaded: {} (using system environment)",
            e
        );
    }

    let store_config = StoreConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "[storefront-terminal-ui] config load failed: {} (using defaults)",
            e
        );
        StoreConfig::default()
    });
    let shop_name = store_config.shop_name.clone();
    let session = StoreSession::bootstrap(&store_config);
    let mut app = TerminalApp::new(session, shop_name);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    loop {
        if app.take_redraw() {
            terminal.draw(|f| draw(f, &app))?;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.search_mode() {
                    match key.code {
                        KeyCode::Esc => app.leave_search(),
                        KeyCode::Backspace => app.pop_search_char(),
                        KeyCode::Char(c) => app.push_search_char(c),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => break,
                        KeyCode::Char('/') => app.enter_search(),
                        KeyCode::Left => app.cycle_category(-1),
                        KeyCode::Right => app.cycle_category(1),
                        KeyCode::Char('s') => app.cycle_sort(),
                        KeyCode::Up => app.move_cursor(-1),
                        KeyCode::Down => app.move_cursor(1),
                        KeyCode::Enter => app.add_highlighted(),
                        KeyCode::Char('d') => app.remove_highlighted(),
                        KeyCode::Char('c') => app.toggle_cart(),
                        _ => {}
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn draw(f: &mut Frame, app: &TerminalApp) {
    let snapshot = app.snapshot();
    let selection = app.selection();

    let mut constraints = vec![Constraint::Length(4), Constraint::Min(8)];
    if snapshot.cart_panel_open {
        let cart_lines = if snapshot.cart_entries.is_empty() {
            1
        } else {
            snapshot.cart_entries.len() + 1
        };
        constraints.push(Constraint::Length(cart_lines as u16 + 2));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    // Header: shop title plus the active controls.
    let search_caret = if app.search_mode() { "_" } else { "" };
    let header_lines = vec![
        Line::from(vec![
            Span::styled(
                app.shop_name().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("   Cart ({})", snapshot.cart_count)),
        ]),
        Line::from(format!(
            "category: {}   sort: {}   search: {}{}",
            selection.selected_category(),
            selection.sort_order().label(),
            selection.search_query(),
            search_caret,
        )),
    ];
    let header =
        Paragraph::new(header_lines).block(Block::default().borders(Borders::ALL).title(" Store "));
    f.render_widget(header, chunks[0]);

    // Product list, with the notice (if any) on top.
    let mut lines: Vec<Line> = Vec::new();
    if let Some(notice) = snapshot.notice.as_deref() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    } else if snapshot.visible.is_empty() {
        lines.push(Line::from(Span::styled(
            "No products match the current filters.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let notice_offset = usize::from(snapshot.notice.is_some());
    for (i, product) in snapshot.visible.iter().enumerate() {
        let marker = if i == app.cursor() { "> " } else { "  " };
        let text = format!(
            "{}{}  [{}]  {}",
            marker,
            product.name,
            product.category.label(),
            snapshot.price_label(product.price)
        );
        let line = if i == app.cursor() {
            Line::from(Span::styled(
                text,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(text)
        };
        lines.push(line);
    }

    // Keep the cursor row on screen.
    let height = chunks[1].height.saturating_sub(2) as usize;
    let cursor_line = app.cursor() + notice_offset;
    let scroll = if height == 0 {
        0
    } else {
        cursor_line.saturating_sub(height - 1)
    };
    let products = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Products ({}) ", snapshot.visible.len())),
        )
        .scroll((scroll as u16, 0));
    f.render_widget(products, chunks[1]);

    // Cart pane, only when toggled open.
    if snapshot.cart_panel_open {
        let cart_lines: Vec<Line> = if snapshot.cart_entries.is_empty() {
            vec![Line::from("Your cart is empty")]
        } else {
            let mut rows: Vec<Line> = snapshot
                .cart_entries
                .iter()
                .map(|p| Line::from(format!("{}  {}", p.name, snapshot.price_label(p.price))))
                .collect();
            rows.push(Line::from(Span::styled(
                snapshot.total_label(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            rows
        };
        let cart = Paragraph::new(cart_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Cart ({}) ", snapshot.cart_count)),
        );
        f.render_widget(cart, chunks[2]);
    }

    let help_text = if app.search_mode() {
        "search mode: type to filter, Backspace deletes, Esc done"
    } else {
        "keys: /=search  left/right=category  s=sort  up/down=move  enter=add  d=remove  c=cart  q=quit"
    };
    let help = Paragraph::new(help_text);
    f.render_widget(help, chunks[chunks.len() - 1]);
}
