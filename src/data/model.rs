use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    pub id: String,
    pub name: String,
    /// ISO dates (`YYYY-MM-DD`) the conference runs on.
    #[serde(default)]
    pub dates: Vec<String>,
    /// `0xRRGGBB` accent used while this conference is open.
    #[serde(default)]
    pub theme_color: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Local start time, `YYYY-MM-DDTHH:MM`.
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub speaker_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Session {
    /// Date part of `start`.
    pub fn day(&self) -> &str {
        self.start.split('T').next().unwrap_or(&self.start)
    }

    /// Time part of `start`, or the whole value if it has no time.
    pub fn start_time(&self) -> &str {
        self.start.split_once('T').map(|(_, t)| t).unwrap_or(&self.start)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub session_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Everything the screens of one conference read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceData {
    pub conference: Conference,
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub venue: Option<Venue>,
}

impl ConferenceData {
    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn speaker(&self, id: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.id == id)
    }

    pub fn speakers_of(&self, session: &Session) -> Vec<Speaker> {
        session
            .speaker_ids
            .iter()
            .filter_map(|id| self.speaker(id).cloned())
            .collect()
    }

    /// Sessions a speaker appears in, by either side of the relation.
    pub fn sessions_of(&self, speaker: &Speaker) -> Vec<Session> {
        self.sessions
            .iter()
            .filter(|s| {
                s.speaker_ids.iter().any(|id| id == &speaker.id)
                    || speaker.session_ids.iter().any(|id| id == &s.id)
            })
            .cloned()
            .collect()
    }
}

/// On-disk shape of a conference data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConferenceCatalog {
    pub conferences: Vec<ConferenceData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: &str, start: &str, speakers: &[&str]) -> Session {
        Session {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            start: start.into(),
            end: start.into(),
            room: None,
            speaker_ids: speakers.iter().map(|s| s.to_string()).collect(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn session_splits_day_and_time() {
        let s = session("s1", "2023-11-25T09:30", &[]);
        assert_eq!(s.day(), "2023-11-25");
        assert_eq!(s.start_time(), "09:30");
    }

    #[test]
    fn sessions_of_uses_both_directions() {
        let speaker = Speaker {
            id: "ana".into(),
            name: "Ana".into(),
            company: None,
            tagline: None,
            bio: String::new(),
            session_ids: vec!["s2".into()],
        };
        let data = ConferenceData {
            conference: Conference {
                id: "c".into(),
                name: "C".into(),
                dates: vec![],
                theme_color: None,
            },
            sessions: vec![
                session("s1", "2023-11-25T09:00", &["ana"]),
                session("s2", "2023-11-25T10:00", &[]),
                session("s3", "2023-11-25T11:00", &["bob"]),
            ],
            speakers: vec![speaker.clone()],
            venue: None,
        };

        let ids: Vec<String> = data.sessions_of(&speaker).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn catalog_parses_minimal_json() {
        let json = r#"{"conferences":[{"conference":{"id":"x","name":"X"}}]}"#;
        let catalog: ConferenceCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.conferences[0].conference.id, "x");
        assert!(catalog.conferences[0].sessions.is_empty());
    }
}
