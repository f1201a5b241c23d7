use std::time::Duration;

use folio_core::content::{SectionId, CONTACT_CHANNELS};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::reveal_progress;
use super::text::{blank, body, column, heading, wrap};
use crate::app::{App, Mode};
use crate::contact_form::{Field, SubmissionState};
use crate::theme::{accent, fade, Midnight};

/// Visible rows of the message box; longer messages scroll to their tail
const MESSAGE_ROWS: usize = 4;
const BLURB: &str = "I'm always interested in hearing about new opportunities and exciting \
                     projects. Let's discuss how we can work together!";

pub struct ContactSection;

impl ContactSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let (indent, inner) = column(width);
        let title = reveal_progress(app, SectionId::Contact, Duration::ZERO);
        let mut lines = vec![blank()];
        lines.extend(heading("Let's", "Connect", Midnight::PINK, title, width));
        for row in wrap(BLURB, inner) {
            lines.push(body(indent, row, fade(Midnight::FG1, title)));
        }
        lines.push(blank());

        let channels = reveal_progress(app, SectionId::Contact, Duration::from_millis(200));
        for channel in CONTACT_CHANNELS {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled("● ", Style::default().fg(fade(accent(channel.accent), channels))),
                Span::styled(
                    format!("{:<10}", channel.title),
                    Style::default()
                        .fg(fade(Midnight::FG0, channels))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(channel.value.to_string(), Style::default().fg(fade(Midnight::GREY2, channels))),
            ]));
        }
        lines.push(blank());

        let form = reveal_progress(app, SectionId::Contact, Duration::from_millis(400));
        let editing = app.mode == Mode::EditContact;
        let field_width = inner.saturating_sub(2).max(1);
        for field in Field::ALL {
            let focused = editing && app.contact.focus() == field;
            let label_color = if focused { Midnight::BLUE } else { Midnight::GREY2 };
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(
                    format!("{} *", field.label()),
                    Style::default().fg(fade(label_color, form)).add_modifier(Modifier::BOLD),
                ),
            ]));

            let value = app.contact.fields().get(field);
            let rows = match field {
                Field::Message => message_rows(value, field_width, focused),
                _ => vec![tail(value, field_width, focused)],
            };
            let edge = if focused { Midnight::BLUE } else { Midnight::BG3 };
            for row in rows {
                lines.push(Line::from(vec![
                    Span::raw(" ".repeat(indent)),
                    Span::styled("▏", Style::default().fg(fade(edge, form))),
                    Span::styled(row, Style::default().fg(fade(Midnight::FG0, form))),
                ]));
            }
            lines.push(blank());
        }

        lines.push(submit_line(app, indent, form));
        lines.push(status_line(app, indent));
        lines.push(blank());
        lines
    }
}

/// Single-line field: the end of the value stays visible while typing
fn tail(value: &str, width: usize, cursor: bool) -> String {
    let mut text = value.to_string();
    if cursor {
        text.push('▌');
    }
    while text.width() > width {
        text.remove(0);
    }
    text
}

fn message_rows(value: &str, width: usize, cursor: bool) -> Vec<String> {
    let mut text = value.to_string();
    if cursor {
        text.push('▌');
    }
    let mut rows = if text.is_empty() { Vec::new() } else { wrap(&text, width) };
    if rows.len() > MESSAGE_ROWS {
        rows.drain(..rows.len() - MESSAGE_ROWS);
    }
    rows.resize(MESSAGE_ROWS, String::new());
    rows
}

fn submit_line(app: &App, indent: usize, form: f64) -> Line<'static> {
    let (label, fg, bg) = match app.contact.state() {
        SubmissionState::Submitting => (" Sending... ", Midnight::GREY2, Midnight::BG2),
        _ if app.contact.can_submit() => (" Send Message ", Midnight::FG0, Midnight::BLUE),
        _ => (" Send Message ", Midnight::GREY1, Midnight::BG2),
    };
    let hint = match app.mode {
        Mode::EditContact => "  Ctrl-s send · Ctrl-l clear · Tab next field · Esc done",
        _ => "  press c to write a message",
    };
    Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(
            label,
            Style::default().fg(fade(fg, form)).bg(fade(bg, form)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(hint, Style::default().fg(fade(Midnight::GREY1, form))),
    ])
}

fn status_line(app: &App, indent: usize) -> Line<'static> {
    let (text, color) = match app.contact.state() {
        SubmissionState::Succeeded => ("Message sent.".to_string(), Midnight::SUCCESS),
        SubmissionState::Failed => ("Sending failed. Try again.".to_string(), Midnight::ERROR),
        SubmissionState::Submitting => (String::new(), Midnight::GREY2),
        SubmissionState::Idle => {
            let missing = app.contact.missing_fields();
            if app.mode == Mode::EditContact && !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                (format!("Required: {}", names.join(", ")), Midnight::GREY1)
            } else {
                (String::new(), Midnight::GREY1)
            }
        }
    };
    body(indent, text, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_box_height_is_fixed() {
        assert_eq!(message_rows("", 10, false).len(), MESSAGE_ROWS);
        let long = "word ".repeat(50);
        let rows = message_rows(&long, 10, true);
        assert_eq!(rows.len(), MESSAGE_ROWS);
        assert!(rows[MESSAGE_ROWS - 1].ends_with('▌'));
    }

    #[test]
    fn test_tail_keeps_end_visible() {
        assert_eq!(tail("abcdef", 4, false), "cdef");
        assert_eq!(tail("abc", 4, true), "abc▌");
        assert_eq!(tail("abcd", 4, true), "bcd▌");
    }
}
