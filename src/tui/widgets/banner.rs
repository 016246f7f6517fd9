//! Outcome banners shown above the form after a submission settles.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Renders the success banner.
///
/// One logical banner per settled success; it stays up until the next
/// submission attempt.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_success_banner(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Consultation Scheduled Successfully! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let body = Paragraph::new(Line::from(
        "Thank you for scheduling your free consultation. Our team will \
         contact you within 24 hours to confirm your appointment.",
    ))
    .style(Style::default().fg(Color::Green))
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(body, area);
}

/// Renders the error banner with an optional diagnostic detail line.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_error_banner(detail: Option<&str>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Failed to Schedule Consultation ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let mut lines = vec![Line::from(
        "Something went wrong while sending your request. Please try again later.",
    )];
    if let Some(detail) = detail {
        lines.push(Line::from(detail.to_string()));
    }
    let body = Paragraph::new(lines)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(body, area);
}

/// Renders the in-flight indicator shown while a submission is outstanding.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_submitting_banner(frame: &mut Frame, area: Rect) {
    let body = Paragraph::new(Line::from("Scheduling consultation..."))
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(body, area);
}
