//! Detail card for a single record, shown as an overlay above the timeline.
//!
//! Names and motivations run through the active [`Highlighter`] so the overlay marks the
//! same matches as the list behind it.

use crate::dataset::Record;
use crate::render::ui::theme::ColorTheme;
use crate::search::Highlighter;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const INDENT: &str = "  ";

/// Split `text` into spans, styling matched pieces with the theme's match style.
pub fn highlighted_spans(
    text: &str,
    highlighter: &Highlighter,
    base: Style,
    theme: &ColorTheme,
) -> Vec<Span<'static>> {
    highlighter
        .segments(text)
        .into_iter()
        .map(|segment| {
            let style = if segment.matched {
                base.patch(theme.search_match)
            } else {
                base
            };
            Span::styled(segment.text.to_string(), style)
        })
        .collect()
}

/// `"Prize in Physics • 1921"`
pub fn footer(record: &Record) -> String {
    format!("Prize in {} • {}", record.category_label(), record.period)
}

/// Overlay title: the category label and period.
pub fn title(record: &Record) -> String {
    format!("{} {}", record.category_label(), record.period)
}

/// Body lines of the detail card.
pub fn detail_lines(
    record: &Record,
    highlighter: &Highlighter,
    theme: &ColorTheme,
) -> Vec<Line<'static>> {
    let accent = match record.known_category() {
        Some(category) => Style::default().fg(theme.category_color(category)),
        None => theme.text(),
    };
    let heading = accent.add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(title(record), heading)), Line::default()];

    let recipients = record.recipients();
    if recipients.is_empty() {
        lines.push(Line::from(Span::styled("Organization Award", heading)));
    } else {
        let label = if recipients.len() == 1 {
            "Laureate"
        } else {
            "Laureates"
        };
        lines.push(Line::from(Span::styled(label, heading)));

        for recipient in recipients {
            let mut name = vec![Span::raw(INDENT)];
            name.extend(highlighted_spans(
                &recipient.full_name(),
                highlighter,
                theme.text().add_modifier(Modifier::BOLD),
                theme,
            ));
            if !recipient.is_sole_recipient() {
                name.push(Span::styled(
                    format!(" (Share: {})", recipient.share_fraction),
                    theme.muted(),
                ));
            }
            lines.push(Line::from(name));

            if !recipient.motivation.is_empty() {
                let mut motivation = vec![Span::raw(INDENT.repeat(2))];
                motivation.extend(highlighted_spans(
                    &recipient.motivation,
                    highlighter,
                    theme.muted(),
                    theme,
                ));
                lines.push(Line::from(motivation));
            }
        }
    }

    if let Some(shared) = record.shared_motivation.as_deref() {
        lines.push(Line::default());
        let quote = theme.text().add_modifier(Modifier::ITALIC);
        let mut spans = vec![Span::styled("\"", quote)];
        spans.extend(highlighted_spans(shared, highlighter, quote, theme));
        spans.push(Span::styled("\"", quote));
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(footer(record), theme.muted())));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Recipient;

    fn recipient(first: &str, last: Option<&str>, motivation: &str, share: &str) -> Recipient {
        Recipient {
            id: first.to_string(),
            first_name: first.to_string(),
            last_name: last.map(str::to_string),
            motivation: motivation.to_string(),
            share_fraction: share.to_string(),
        }
    }

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn single_laureate_card() {
        let record = Record {
            period: "1921".to_string(),
            category: "physics".to_string(),
            shared_motivation: None,
            recipients: Some(vec![recipient(
                "Albert",
                Some("Einstein"),
                "for his services to Theoretical Physics",
                "1",
            )]),
        };
        let text = plain(&detail_lines(
            &record,
            &Highlighter::new(""),
            &ColorTheme::default(),
        ));

        assert_eq!(text[0], "Physics 1921");
        assert_eq!(text[2], "Laureate");
        assert_eq!(text[3], "  Albert Einstein");
        assert_eq!(text[4], "    for his services to Theoretical Physics");
        assert_eq!(text.last().unwrap(), "Prize in Physics • 1921");
    }

    #[test]
    fn shared_award_shows_shares_and_quote() {
        let record = Record {
            period: "2018".to_string(),
            category: "physics".to_string(),
            shared_motivation: Some("for laser physics".to_string()),
            recipients: Some(vec![
                recipient("Arthur", Some("Ashkin"), "", "2"),
                recipient("Gérard", Some("Mourou"), "", "4"),
            ]),
        };
        let text = plain(&detail_lines(
            &record,
            &Highlighter::new(""),
            &ColorTheme::default(),
        ));

        assert_eq!(text[2], "Laureates");
        assert_eq!(text[3], "  Arthur Ashkin (Share: 2)");
        assert_eq!(text[4], "  Gérard Mourou (Share: 4)");
        assert!(text.contains(&"\"for laser physics\"".to_string()));
    }

    #[test]
    fn organization_award_without_recipients() {
        let record = Record {
            period: "1948".to_string(),
            category: "peace".to_string(),
            shared_motivation: Some("No Nobel Prize was awarded this year".to_string()),
            recipients: None,
        };
        let text = plain(&detail_lines(
            &record,
            &Highlighter::new(""),
            &ColorTheme::default(),
        ));

        assert_eq!(text[2], "Organization Award");
        assert_eq!(text.last().unwrap(), "Prize in Peace • 1948");
    }

    #[test]
    fn matches_are_styled() {
        let theme = ColorTheme::default();
        let spans = highlighted_spans(
            "Albert Einstein",
            &Highlighter::new("stein"),
            Style::default(),
            &theme,
        );

        let contents: Vec<&str> = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(contents, vec!["Albert Ein", "stein"]);
        assert_eq!(spans[0].style.bg, None);
        assert_eq!(spans[1].style.bg, theme.search_match.bg);
    }

    #[test]
    fn unknown_category_uses_raw_label() {
        let record = Record {
            period: "1930".to_string(),
            category: "astronomy".to_string(),
            shared_motivation: None,
            recipients: None,
        };
        assert_eq!(footer(&record), "Prize in astronomy • 1930");
    }
}
