//! The starter feed written on first load so the grid is never empty.

use crate::models::Artist;

const SEED: &[(&str, &str, [&str; 2], [&str; 2], &str)] = &[
    (
        "m1",
        "NEON WAVE",
        ["Vocals", "Bass"],
        ["Synth", "Production"],
        "https://images.unsplash.com/photo-1542596594-649edbc13630?q=80&w=1000&auto=format&fit=crop",
    ),
    (
        "m2",
        "LUNA ECHO",
        ["Guitar", "Drums"],
        ["Vocals", "Songwriting"],
        "https://images.unsplash.com/photo-1516280440614-6697288d5d38?q=80&w=1000&auto=format&fit=crop",
    ),
    (
        "m3",
        "VOID WALKER",
        ["Mixing", "Mastering"],
        ["Sound Design", "Foley"],
        "https://images.unsplash.com/photo-1534528741775-53994a69daeb?q=80&w=1000&auto=format&fit=crop",
    ),
    (
        "m4",
        "ASTRAL BEAT",
        ["Rapper", "Feature"],
        ["Beatmaking", "Keys"],
        "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?q=80&w=1000&auto=format&fit=crop",
    ),
    (
        "m5",
        "SOLAR FLARE",
        ["Video Editor", "VFX"],
        ["Rap", "Performance"],
        "https://images.unsplash.com/photo-1529665253569-6d01c0eaf7b6?q=80&w=1000&auto=format&fit=crop",
    ),
    (
        "m6",
        "ECHO CHAMBER",
        ["Collab", "Remix"],
        ["Ambient", "Drone"],
        "https://images.unsplash.com/photo-1500917293891-ef795e70e1f6?q=80&w=1000&auto=format&fit=crop",
    ),
];

/// The canonical seed feed, in display order.
pub fn seed_artists() -> Vec<Artist> {
    SEED.iter()
        .map(|(id, name, wants, skills, image)| Artist {
            id: id.to_string(),
            name: name.to_string(),
            wants: wants.iter().map(|s| s.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            image: Some(image.to_string()),
            bio: None,
            contact: None,
            social: None,
            location: None,
            tracks: Vec::new(),
            videos: Vec::new(),
        })
        .collect()
}
