//! Date label formatting.

use super::types::DateFormat;
use crate::models::TimelineEvent;

/// Format the event date with `format`; unparseable dates are echoed verbatim.
pub fn format_event_date(event: &TimelineEvent, format: DateFormat) -> String {
    match event.instant() {
        Some(dt) => dt.format(format.strftime()).to_string(),
        None => event.date.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(date: &str) -> TimelineEvent {
        TimelineEvent::new("x", date, "X")
    }

    #[test]
    fn every_template_renders() {
        let e = ev("2024-03-01");
        let got: Vec<String> = DateFormat::ALL
            .iter()
            .map(|f| format_event_date(&e, *f))
            .collect();
        assert_eq!(
            got,
            vec![
                "Mar 1, 2024",
                "March 1, 2024",
                "2024-03-01",
                "03/01/2024",
                "01/03/2024",
                "March 2024",
                "2024",
            ]
        );
    }

    #[test]
    fn bad_dates_pass_through() {
        assert_eq!(format_event_date(&ev(" someday "), DateFormat::Long), "someday");
    }
}
