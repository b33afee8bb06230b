use std::collections::BTreeSet;

use crate::models::{Platform, QuizAnswers};

/// Scale answers at or above this value select the "high" bundle
const SCALE_CUTOFF: i64 = 4;

// q1: how social the player is
const SOCIAL_HIGH: [&str; 2] = ["multiplayer", "co-op"];
const SOCIAL_LOW: [&str; 2] = ["singleplayer", "story-rich"];

// q2: how relaxed the pacing should be
const PACING_HIGH: [&str; 2] = ["casual", "puzzle"];
const PACING_LOW: [&str; 2] = ["fps", "online"];

// q3: grounded worlds versus distant ones
const SETTING_HIGH: [&str; 2] = ["simulation", "open-world"];
const SETTING_LOW: [&str; 2] = ["sci-fi", "space"];

// q4: preferred genre, one bundle per choice 1-5
const GENRE_BUNDLES: [[&str; 2]; 5] = [
    ["action", "adventure"],
    ["rpg", "fantasy"],
    ["strategy", "indie"],
    ["sports", "racing"],
    ["horror", "survival"],
];

// q5: preferred soundtrack, one bundle per choice 1-5
const SOUNDTRACK_BUNDLES: [[&str; 2]; 5] = [
    ["orchestral", "epic"],
    ["electronic", "synthwave"],
    ["rock", "metal"],
    ["jazz", "artistic"],
    ["ambient", "chill"],
];

/// Maps a full answer set to its derived tag set and platform preference.
///
/// Pure and deterministic: thresholded scale answers and table lookups only,
/// with out-of-range choices contributing nothing.
pub fn derive_tags(answers: QuizAnswers) -> (BTreeSet<String>, Platform) {
    let mut tags = BTreeSet::new();

    let scale_questions = [
        (answers.q1, SOCIAL_HIGH, SOCIAL_LOW),
        (answers.q2, PACING_HIGH, PACING_LOW),
        (answers.q3, SETTING_HIGH, SETTING_LOW),
    ];
    for (answer, high, low) in scale_questions {
        let bundle = if answer >= SCALE_CUTOFF { high } else { low };
        tags.extend(bundle.iter().map(|tag| tag.to_string()));
    }

    tags.extend(
        choice_bundle(&GENRE_BUNDLES, answers.q4)
            .iter()
            .map(|tag| tag.to_string()),
    );
    tags.extend(
        choice_bundle(&SOUNDTRACK_BUNDLES, answers.q5)
            .iter()
            .map(|tag| tag.to_string()),
    );

    (tags, platform_for(answers.q6))
}

/// Maps the platform question to a preference, defaulting to no preference
pub fn platform_for(choice: i64) -> Platform {
    match choice {
        1 => Platform::Windows,
        2 => Platform::Mac,
        3 => Platform::Linux,
        4 => Platform::SteamDeck,
        _ => Platform::All,
    }
}

/// Selects the bundle for a 1-based choice; out-of-range choices are empty
fn choice_bundle<'a>(table: &'a [[&'static str; 2]; 5], choice: i64) -> &'a [&'static str] {
    if (1..=5).contains(&choice) {
        &table[(choice - 1) as usize]
    } else {
        &[]
    }
}
