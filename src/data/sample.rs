//! Built-in catalog used when no data file is configured.

use crate::data::model::{Conference, ConferenceCatalog, ConferenceData, Session, Speaker, Venue};

fn session(id: &str, title: &str, start: &str, end: &str, room: &str, speakers: &[&str]) -> Session {
    Session {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title}."),
        start: start.to_string(),
        end: end.to_string(),
        room: Some(room.to_string()),
        speaker_ids: speakers.iter().map(|s| s.to_string()).collect(),
        tags: Vec::new(),
    }
}

fn speaker(id: &str, name: &str, company: &str, bio: &str) -> Speaker {
    Speaker {
        id: id.to_string(),
        name: name.to_string(),
        company: Some(company.to_string()),
        tagline: None,
        bio: bio.to_string(),
        session_ids: Vec::new(),
    }
}

pub fn sample_catalog() -> ConferenceCatalog {
    ConferenceCatalog {
        conferences: vec![devfest(), kotlinconf()],
    }
}

fn devfest() -> ConferenceData {
    ConferenceData {
        conference: Conference {
            id: "devfest23".to_string(),
            name: "DevFest 2023".to_string(),
            dates: vec!["2023-11-25".to_string()],
            theme_color: Some(0x4285f4),
        },
        sessions: vec![
            session(
                "df-keynote",
                "Opening Keynote",
                "2023-11-25T09:00",
                "2023-11-25T09:45",
                "Main Hall",
                &["ines"],
            ),
            session(
                "df-compose",
                "Compose at Scale",
                "2023-11-25T10:00",
                "2023-11-25T10:45",
                "Room A",
                &["tomas", "ines"],
            ),
            session(
                "df-graphql",
                "Offline-first GraphQL",
                "2023-11-25T11:00",
                "2023-11-25T11:45",
                "Room B",
                &["mei"],
            ),
        ],
        speakers: vec![
            speaker("ines", "Ines Duarte", "Duarte Labs", "Builds developer tools."),
            speaker("tomas", "Tomas Novak", "Northwind", "Works on UI toolkits."),
            speaker("mei", "Mei Tanaka", "Kaizen Apps", "Caches everything."),
        ],
        venue: Some(Venue {
            name: "Cinema City".to_string(),
            address: "1 Harbour Road".to_string(),
            description: "Talks run across three screens.".to_string(),
            latitude: Some(53.3498),
            longitude: Some(-6.2603),
        }),
    }
}

fn kotlinconf() -> ConferenceData {
    ConferenceData {
        conference: Conference {
            id: "kotlinconf24".to_string(),
            name: "KotlinConf 2024".to_string(),
            dates: vec!["2024-05-22".to_string(), "2024-05-23".to_string()],
            theme_color: Some(0x7f52ff),
        },
        sessions: vec![
            session(
                "kc-opening",
                "Opening Keynote",
                "2024-05-22T09:00",
                "2024-05-22T10:00",
                "Auditorium",
                &["ola"],
            ),
            session(
                "kc-multiplatform",
                "Sharing UI Across Platforms",
                "2024-05-22T10:30",
                "2024-05-22T11:15",
                "Hall B",
                &["ravi"],
            ),
            session(
                "kc-coroutines",
                "Structured Concurrency in Practice",
                "2024-05-23T09:30",
                "2024-05-23T10:15",
                "Hall C",
                &["ola", "ravi"],
            ),
        ],
        speakers: vec![
            speaker("ola", "Ola Berg", "Fjord Systems", "Language design and tooling."),
            speaker("ravi", "Ravi Menon", "Peak Mobile", "Ships apps on five platforms."),
        ],
        venue: Some(Venue {
            name: "Bella Center".to_string(),
            address: "Center Blvd. 5".to_string(),
            description: "Conference centre with six session halls.".to_string(),
            latitude: Some(55.6376),
            longitude: Some(12.5783),
        }),
    }
}
