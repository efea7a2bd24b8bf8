//! Entry domain types.
//!
//! An [`Entry`] is one diary record; an [`EntryDraft`] is the same record
//! before the store has assigned it an id. Both are shared with the
//! frontend, so they export TypeScript bindings.
//!
//! The snapshot ordering lives here as well: newest date first, then the
//! clock label descending (entries without one last), then newest
//! insertion first. The repository relies on [`sort_newest_first`] and
//! [`insertion_index`] to uphold that invariant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{HaruError, Result};
use crate::store::{PostFields, PostRecord};

/// One diary record: title, user-chosen date, free text, optional clock
/// label and location, and an ordered list of photo URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Entry {
    /// Opaque unique identifier, assigned by the store on creation
    pub id: String,
    /// Entry title, never empty
    pub title: String,
    /// User-chosen calendar date (not necessarily the creation date)
    pub date: NaiveDate,
    /// Human-readable clock label captured at submission, e.g. "10:30 AM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Entry body text, never empty after trimming
    pub content: String,
    /// Free-text location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Ordered absolute photo URLs; the first is the cover photo.
    ///
    /// Only the cover survives a round trip through the store - the
    /// persisted schema keeps a single `image_url` per row.
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Entry {
    /// The cover photo, i.e. the first photo URL if any.
    pub fn cover_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// Build an entry from a stored row. The photo list carries the row's
    /// single `image_url`, or stays empty.
    pub fn from_record(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            date: record.date,
            time: record.time,
            content: record.content,
            location: record.location,
            photos: record.image_url.into_iter().collect(),
        }
    }

    /// Ordering key for the snapshot: compared descending, so a larger
    /// key sorts earlier. Entries without a clock label order after those
    /// with one on the same date.
    pub(crate) fn sort_key(&self) -> (NaiveDate, Option<&str>) {
        (self.date, self.time.as_deref())
    }
}

/// An [`Entry`] without an assigned identifier, submitted for creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EntryDraft {
    /// Entry title
    pub title: String,
    /// User-chosen calendar date
    pub date: NaiveDate,
    /// Clock label captured at submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Entry body text
    pub content: String,
    /// Free-text location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Already-uploaded photo URLs (upload happens before submission)
    #[serde(default)]
    pub photos: Vec<String>,
}

impl EntryDraft {
    /// Check the draft invariants: non-empty title, non-empty content
    /// after trimming.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(HaruError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(HaruError::EmptyContent);
        }
        Ok(())
    }

    /// Insert payload for the store. The photo list is truncated to the
    /// cover photo here, since the persisted schema stores one URL.
    pub fn to_fields(&self) -> PostFields {
        PostFields {
            title: self.title.clone(),
            date: self.date,
            time: self.time.clone(),
            content: self.content.clone(),
            location: self.location.clone(),
            image_url: self.photos.first().cloned(),
        }
    }

    /// Confirmed entry: the draft's fields under the store-assigned id.
    /// The full photo list is kept for the session even though only the
    /// cover was persisted.
    pub fn into_entry(self, id: impl Into<String>) -> Entry {
        Entry {
            id: id.into(),
            title: self.title,
            date: self.date,
            time: self.time,
            content: self.content,
            location: self.location,
            photos: self.photos,
        }
    }
}

/// Normalize a list to the snapshot order: date descending, clock label
/// descending, insertion order preserved within ties (stable sort).
pub(crate) fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
}

/// Position at which `entry` belongs in an already-ordered list. Equal
/// keys insert before existing entries, keeping newest insertion first.
pub(crate) fn insertion_index(entries: &[Entry], entry: &Entry) -> usize {
    let key = entry.sort_key();
    entries.partition_point(|e| e.sort_key() > key)
}

/// Clock label for a time of day, in the fixed format the snapshot
/// ordering expects, e.g. "06:15 PM".
pub fn clock_label(time: chrono::NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// Clock label for the current local time, for capture at submission.
pub fn current_clock_label() -> String {
    clock_label(chrono::Local::now().time())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn entry(id: &str, date: (i32, u32, u32), time: Option<&str>) -> Entry {
        Entry {
            id: id.to_string(),
            title: format!("entry {}", id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: time.map(String::from),
            content: "content".to_string(),
            location: None,
            photos: vec![],
        }
    }

    #[test]
    fn test_sort_newest_first_by_date() {
        let mut entries = vec![
            entry("a", (2023, 11, 20), None),
            entry("b", (2023, 11, 23), None),
            entry("c", (2023, 11, 22), None),
        ];
        sort_newest_first(&mut entries);

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_same_date_orders_by_clock_label_descending() {
        let mut entries = vec![
            entry("early", (2023, 11, 22), Some("02:00 PM")),
            entry("late", (2023, 11, 22), Some("06:15 PM")),
            entry("untimed", (2023, 11, 22), None),
        ];
        sort_newest_first(&mut entries);

        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early", "untimed"]);
    }

    #[test]
    fn test_sort_is_stable_within_equal_keys() {
        let mut entries = vec![
            entry("first", (2023, 11, 22), Some("10:30 AM")),
            entry("second", (2023, 11, 22), Some("10:30 AM")),
        ];
        sort_newest_first(&mut entries);

        assert_eq!(entries[0].id, "first");
        assert_eq!(entries[1].id, "second");
    }

    #[test]
    fn test_insertion_index_places_newest_before_equal_keys() {
        let entries = vec![
            entry("a", (2023, 11, 23), None),
            entry("b", (2023, 11, 22), Some("10:30 AM")),
            entry("c", (2023, 11, 20), None),
        ];

        // Later date than everything: front of the list
        let newest = entry("n", (2023, 11, 24), None);
        assert_eq!(insertion_index(&entries, &newest), 0);

        // Equal key to "b": before it
        let duplicate = entry("d", (2023, 11, 22), Some("10:30 AM"));
        assert_eq!(insertion_index(&entries, &duplicate), 1);

        // Older than everything: end of the list
        let oldest = entry("o", (2023, 11, 1), None);
        assert_eq!(insertion_index(&entries, &oldest), 3);
    }

    #[test]
    fn test_validate_rejects_blank_title_and_content() {
        let draft = EntryDraft {
            title: "  ".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 23).unwrap(),
            time: None,
            content: "Coffee".to_string(),
            location: None,
            photos: vec![],
        };
        assert!(matches!(draft.validate(), Err(HaruError::EmptyTitle)));

        let draft = EntryDraft {
            title: "Morning".to_string(),
            content: " \n ".to_string(),
            ..draft
        };
        assert!(matches!(draft.validate(), Err(HaruError::EmptyContent)));
    }

    #[test]
    fn test_to_fields_truncates_to_cover_photo() {
        let draft = EntryDraft {
            title: "Walk".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 22).unwrap(),
            time: Some("06:15 PM".to_string()),
            content: "River".to_string(),
            location: Some("Park".to_string()),
            photos: vec!["https://img/a.jpg".to_string(), "https://img/b.jpg".to_string()],
        };

        let fields = draft.to_fields();
        assert_eq!(fields.image_url.as_deref(), Some("https://img/a.jpg"));

        // The confirmed entry still carries the full list for the session
        let entry = draft.into_entry("id-1");
        assert_eq!(entry.photos.len(), 2);
        assert_eq!(entry.cover_photo(), Some("https://img/a.jpg"));
    }

    #[test]
    fn test_from_record_carries_single_photo() {
        let record = PostRecord {
            id: "1".to_string(),
            title: "t".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
            time: None,
            content: "c".to_string(),
            location: None,
            image_url: Some("https://img/a.jpg".to_string()),
        };
        assert_eq!(
            Entry::from_record(record).photos,
            vec!["https://img/a.jpg".to_string()]
        );

        let record = PostRecord {
            id: "2".to_string(),
            title: "t".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
            time: None,
            content: "c".to_string(),
            location: None,
            image_url: None,
        };
        assert!(Entry::from_record(record).photos.is_empty());
    }

    #[test]
    fn test_clock_label_format() {
        let label = clock_label(NaiveTime::from_hms_opt(18, 15, 0).unwrap());
        assert_eq!(label, "06:15 PM");

        let label = clock_label(NaiveTime::from_hms_opt(10, 30, 59).unwrap());
        assert_eq!(label, "10:30 AM");
    }
}
