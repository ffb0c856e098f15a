use serde::Serialize;

/// A demo match profile. The list is a read-only fixture injected into
/// app state at startup; nothing writes to it.
#[derive(Debug, Clone, Serialize)]
pub struct MatchProfile {
    pub id: i64,
    pub name: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub wants: Vec<String>,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub rating: f64,
}

fn profile(
    id: i64,
    name: &str,
    avatar: &str,
    skills: &[&str],
    wants: &[&str],
    match_score: u8,
    rating: f64,
) -> MatchProfile {
    MatchProfile {
        id,
        name: name.to_string(),
        avatar: avatar.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        wants: wants.iter().map(|s| s.to_string()).collect(),
        match_score,
        rating,
    }
}

pub fn demo_matches() -> Vec<MatchProfile> {
    vec![
        profile(
            1,
            "Sarah Johnson",
            "SJ",
            &["Graphic Design", "UI/UX"],
            &["Web Development", "JavaScript"],
            95,
            4.9,
        ),
        profile(
            2,
            "Mike Chen",
            "MC",
            &["Photography", "Video Editing"],
            &["Content Writing", "Marketing"],
            88,
            4.8,
        ),
        profile(
            3,
            "Emily Davis",
            "ED",
            &["Piano", "Music Theory"],
            &["Graphic Design", "Illustration"],
            92,
            5.0,
        ),
        profile(
            4,
            "Alex Rivera",
            "AR",
            &["Spanish", "Translation"],
            &["Web Development", "Python"],
            85,
            4.7,
        ),
        profile(
            5,
            "Lisa Park",
            "LP",
            &["Yoga", "Fitness Training"],
            &["Video Editing", "Photography"],
            78,
            4.6,
        ),
        profile(
            6,
            "David Kumar",
            "DK",
            &["Data Science", "Machine Learning"],
            &["UI/UX Design", "Prototyping"],
            90,
            4.9,
        ),
    ]
}
