//! Small display helpers shared by several pages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html};

use crate::net::types::ApplicationStatus;

/// Whether `target` may be used as a link or image address.
///
/// Absolute URLs must be `http` or `https`; scheme-less relative links pass.
#[must_use]
pub fn is_safe_link(target: &str) -> bool {
    match url::Url::parse(target) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(url::ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// `href` for backend-supplied link text, or `None` when it is not a safe link.
#[must_use]
pub fn safe_href(target: &str) -> Option<String> {
    let target = target.trim();
    (!target.is_empty() && is_safe_link(target)).then(|| target.to_owned())
}

/// Render backend-authored markdown to HTML with raw HTML removed.
///
/// Links and images with an unsafe target lose their wrapper; their text
/// is kept.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // One entry per open link/image: whether its wrapper was dropped.
    let mut dropped: Vec<bool> = Vec::new();
    let parser = Parser::new_ext(markdown, options).filter_map(move |event| {
        let keep = match &event {
            Event::Html(_) | Event::InlineHtml(_) => false,
            Event::Start(Tag::Link { dest_url, .. } | Tag::Image { dest_url, .. }) => {
                let safe = is_safe_link(dest_url);
                dropped.push(!safe);
                safe
            }
            Event::End(TagEnd::Link | TagEnd::Image) => !dropped.pop().unwrap_or(false),
            _ => true,
        };
        keep.then_some(event)
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Badge class for an application status label.
#[must_use]
pub fn status_class(label: &str) -> &'static str {
    match ApplicationStatus::from_label(label) {
        Some(ApplicationStatus::Approved | ApplicationStatus::Assigned) => "status status--approved",
        Some(ApplicationStatus::Rejected | ApplicationStatus::Cancelled) => "status status--rejected",
        Some(ApplicationStatus::Pending) => "status status--pending",
        Some(ApplicationStatus::ReUpload) => "status status--reupload",
        Some(ApplicationStatus::InProgress) | None => "status status--progress",
    }
}

/// `YYYY-MM-DD` prefix of an ISO-8601 timestamp; other input is returned as-is.
#[must_use]
pub fn short_date(timestamp: &str) -> &str {
    let trimmed = timestamp.trim();
    match trimmed.get(..10) {
        Some(day) if day.as_bytes().get(4) == Some(&b'-') && day.as_bytes().get(7) == Some(&b'-') => day,
        _ => trimmed,
    }
}

/// Availability badge text for a lodgement card.
#[must_use]
pub fn availability_label(is_available: bool, busy_until: Option<&str>) -> String {
    match (is_available, busy_until.map(str::trim).filter(|s| !s.is_empty())) {
        (true, _) => "Available".to_owned(),
        (false, Some(until)) => format!("Busy until {}", short_date(until)),
        (false, None) => "Not available".to_owned(),
    }
}

/// Numeric id from a `:id` route segment.
#[must_use]
pub fn parse_route_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id: &i64| *id > 0)
}
