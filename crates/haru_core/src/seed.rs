//! Demo seed entries.
//!
//! Three sample entries a fresh diary can start with, so the calendar,
//! timeline and gallery all have something to show. They are inserted
//! through the store like any user entry - the repository only does this
//! when seeding is explicitly enabled and the store comes up empty.

use chrono::NaiveDate;

use crate::entry::EntryDraft;

/// The demo drafts, newest date first.
pub fn demo_drafts() -> Vec<EntryDraft> {
    vec![
        EntryDraft {
            title: "여유로운 아침".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 23).unwrap(),
            time: Some("10:30 AM".to_string()),
            location: Some("카페 블루".to_string()),
            content: "따뜻한 커피 한 잔과 좋아하는 책으로 시작하는 아침. 창가로 들어오는 햇살이 참 좋았다."
                .to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1516483638261-f4dbaf036963?q=80&w=600&auto=format&fit=crop"
                    .to_string(),
            ],
        },
        EntryDraft {
            title: "한강 산책".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 22).unwrap(),
            time: Some("06:15 PM".to_string()),
            location: Some("한강공원".to_string()),
            content: "해질 무렵의 한강은 언제나 아름답다. 선선한 바람을 맞으며 걷다 보니 복잡했던 마음이 정리되는 기분이다."
                .to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1513622470522-26c3c8a854bc?q=80&w=600&auto=format&fit=crop"
                    .to_string(),
                "https://images.unsplash.com/photo-1470240731273-7821a6eeb6bd?q=80&w=600&auto=format&fit=crop"
                    .to_string(),
            ],
        },
        EntryDraft {
            title: "비 오는 날".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 11, 20).unwrap(),
            time: Some("02:00 PM".to_string()),
            location: Some("집".to_string()),
            content: "창밖으로 들리는 빗소리가 좋아서 하루 종일 집에서 뒹굴거렸다. 가끔은 이런 게으름도 필요해."
                .to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1515694346937-94d85e41e6f0?q=80&w=600&auto=format&fit=crop"
                    .to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_drafts_are_valid() {
        let drafts = demo_drafts();
        assert_eq!(drafts.len(), 3);
        for draft in &drafts {
            draft.validate().unwrap();
            assert!(!draft.photos.is_empty());
        }
    }

    #[test]
    fn test_demo_drafts_come_newest_first() {
        let dates: Vec<NaiveDate> = demo_drafts().into_iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}
