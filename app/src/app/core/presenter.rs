use chrono::{DateTime, Utc};

use crate::app::types::ArtifactRef;

/// What the result pane should show. Exactly one state applies at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultView<'a> {
    /// Nothing generated yet and nothing in flight.
    Idle,
    /// A generation is outstanding. Wins over a previously shown artifact.
    Busy,
    /// The most recent artifact.
    Populated(&'a ArtifactRef),
}

impl<'a> ResultView<'a> {
    pub fn from_parts(generating: bool, artifact: Option<&'a ArtifactRef>) -> Self {
        match (generating, artifact) {
            (true, _) => ResultView::Busy,
            (false, Some(a)) => ResultView::Populated(a),
            (false, None) => ResultView::Idle,
        }
    }
}

/// A save of the current artifact that the runner should carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    pub artifact: ArtifactRef,
    pub filename: String,
}

/// Timestamped filename used for saved artifacts: `ai-generated-<millis>.jpg`.
pub fn download_filename(now: DateTime<Utc>) -> String {
    format!("ai-generated-{}.jpg", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn busy_takes_precedence_over_artifact() {
        let a = ArtifactRef::new("https://example.com/a.jpg");
        assert_eq!(ResultView::from_parts(true, Some(&a)), ResultView::Busy);
        assert_eq!(ResultView::from_parts(true, None), ResultView::Busy);
    }

    #[test]
    fn idle_and_populated() {
        let a = ArtifactRef::new("https://example.com/a.jpg");
        assert_eq!(ResultView::from_parts(false, None), ResultView::Idle);
        assert_eq!(ResultView::from_parts(false, Some(&a)), ResultView::Populated(&a));
    }

    #[test]
    fn filename_uses_unix_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(download_filename(now), "ai-generated-1700000000123.jpg");
    }
}
