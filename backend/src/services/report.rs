//! CSV export of the recent uploads table.

use crate::api::VideoRecord;

/// Suggested download name for the analytics report.
pub const REPORT_FILENAME: &str = "analytics_report.csv";

const REPORT_HEADER: &str = "video_name,upload_date,person_count,status";

/// Render one CSV row per record, header first, newline terminated.
pub fn render_report_csv(records: &[VideoRecord]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(REPORT_HEADER.to_string());
    for record in records {
        rows.push(format!(
            "{},{},{},{}",
            escape_field(&record.video_name),
            record.upload_date(),
            record.person_count,
            record.status
        ));
    }

    let mut csv = rows.join("\n");
    csv.push('\n');
    csv
}

/// Quote fields containing separators so file names with commas stay in one column.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::VideoStatus;
    use chrono::TimeZone;

    fn record(name: &str, count: u64, status: VideoStatus) -> VideoRecord {
        let mut record = VideoRecord::new(name);
        record.uploaded_at = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap();
        record.person_count = count;
        record.status = status;
        record
    }

    #[test]
    fn test_empty_report_has_header() {
        assert_eq!(render_report_csv(&[]), "video_name,upload_date,person_count,status\n");
    }

    #[test]
    fn test_report_rows() {
        let csv = render_report_csv(&[
            record("hall.mp4", 7, VideoStatus::Completed),
            record("gate.mp4", 0, VideoStatus::Failed),
        ]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "hall.mp4,2024-01-02,7,completed");
        assert_eq!(lines[2], "gate.mp4,2024-01-02,0,failed");
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_report_quotes_commas() {
        let csv = render_report_csv(&[record("a,b \"x\".mp4", 1, VideoStatus::Processing)]);
        assert!(csv.contains("\"a,b \"\"x\"\".mp4\",2024-01-02,1,processing"));
    }
}
