//! Rendering for the storefront TUI.
//!
//! One frame: branded header, the optional chef panel, the dish list, the
//! cart bar, and a keybind footer. Every label is drawn from the two-language
//! table in the active language; Arabic frames align text to the right.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::menu;
use crate::state::AppState;
use crate::theme::theme;
use crate::util::format_price;

/// Pad a string with spaces to a display width, Arabic-aware via
/// `unicode-width`.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let mut out = s.to_string();
    for _ in w..width {
        out.push(' ');
    }
    out
}

/// What: Render one frame of the storefront.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Current view-state (selection state is mutated for the list).
///
/// Output:
/// - None (draws widgets into the frame).
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme(app.theme_mode);
    let lang = app.lang;
    let area = f.area();
    let align = if lang.dir() == "rtl" {
        Alignment::Right
    } else {
        Alignment::Left
    };

    // Background
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chef_h: u16 = if app.chef_open { 7 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(chef_h),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Header: title, slogan, hero line
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                t(lang, "title"),
                Style::default().fg(th.tomato).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", t(lang, "slogan")),
                Style::default().fg(th.subtext),
            ),
        ]),
        Line::from(Span::styled(
            t(lang, "hero"),
            Style::default().fg(th.text).add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(align)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(th.overlay))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(header, chunks[0]);

    // Chef panel, only while open
    if app.chef_open {
        let body = if app.chef_pending {
            Span::styled(
                t(lang, "typing"),
                Style::default().fg(th.subtext).add_modifier(Modifier::ITALIC),
            )
        } else if app.chef_response.is_empty() {
            Span::styled(
                t(lang, "chef_placeholder"),
                Style::default().fg(th.subtext).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(app.chef_response.clone(), Style::default().fg(th.text))
        };
        let panel = Paragraph::new(Line::from(body))
            .wrap(Wrap { trim: true })
            .alignment(align)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(th.tomato))
                    .title(Span::styled(
                        format!(" {} ", t(lang, "chef_heading")),
                        Style::default().fg(th.tomato).add_modifier(Modifier::BOLD),
                    ))
                    .style(Style::default().bg(th.surface)),
            );
        f.render_widget(panel, chunks[1]);
    }

    // Dish list
    let name_w = menu::menu()
        .iter()
        .map(|d| {
            UnicodeWidthStr::width(match lang {
                crate::i18n::Lang::En => d.name_en.as_str(),
                crate::i18n::Lang::Ar => d.name_ar.as_str(),
            })
        })
        .max()
        .unwrap_or(0);
    let items: Vec<ListItem> = menu::menu()
        .iter()
        .map(|d| {
            let name = match lang {
                crate::i18n::Lang::En => d.name_en.as_str(),
                crate::i18n::Lang::Ar => d.name_ar.as_str(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    pad(name, name_w + 2),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(pad(&d.category, 12), Style::default().fg(th.green)),
                Span::styled(format_price(d.price), Style::default().fg(th.tomato)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .highlight_style(
            Style::default()
                .bg(th.surface)
                .fg(th.tomato)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("› ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay))
                .title(Span::styled(
                    format!(" {} ", t(lang, "menu")),
                    Style::default().fg(th.subtext),
                )),
        );
    f.render_stateful_widget(list, chunks[2], &mut app.list_state);

    // Cart bar: item count, running total, checkout hint
    let cart_line = Line::from(vec![
        Span::styled(
            format!("{}: {}  ", t(lang, "cart"), app.cart_count()),
            Style::default().fg(th.subtext),
        ),
        Span::styled(
            format_price(app.cart_total()),
            Style::default().fg(th.tomato).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   [{}]", t(lang, "checkout")),
            Style::default().fg(th.yellow),
        ),
    ]);
    let cart = Paragraph::new(cart_line).alignment(align).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(cart, chunks[3]);

    // Keybind footer: the theme key shows the mode the toggle switches to
    let next_theme = match app.theme_mode {
        crate::theme::ThemeMode::Light => t(lang, "theme_dark"),
        crate::theme::ThemeMode::Dark => t(lang, "theme_light"),
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(
            "q quit  t {next_theme}  l {}  \u{2191}/\u{2193} select  Enter {}  c {}",
            lang.flip().code().to_uppercase(),
            t(lang, "add_to_cart"),
            t(lang, "ask_chef"),
        ),
        Style::default().fg(th.subtext),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[4]);
}
