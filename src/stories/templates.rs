//! The 16 seed stories the sample dataset is expanded from.
//!
//! Listed in id order 1-16. Every expanded copy carries these field values
//! verbatim; only the id is rewritten during expansion.

use super::{Genre, Story};

/// A seed story embedded in the binary.
///
/// Static counterpart of [`Story`]; expansion turns copies of these into
/// owned records via [`StoryTemplate::instantiate`].
#[derive(Debug, Clone, Copy)]
pub struct StoryTemplate {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub genre: Genre,
    pub date: &'static str,
    pub likes: u32,
    pub saves: u32,
    pub author: &'static str,
}

impl StoryTemplate {
    /// Owned record carrying this template's fields under a new id.
    pub fn instantiate(&self, id: u32) -> Story {
        Story {
            id,
            title: self.title.to_string(),
            excerpt: self.excerpt.to_string(),
            genre: self.genre,
            date: self.date.to_string(),
            likes: self.likes,
            saves: self.saves,
            author: self.author.to_string(),
        }
    }
}

/// Seed data for the sample feed.
pub const TEMPLATES: &[StoryTemplate] = &[
    StoryTemplate {
        id: 1,
        title: "The Silent Hours",
        excerpt: "In those moments between dusk and darkness, when the world grows quiet and memories surface like stars in the evening sky...",
        genre: Genre::Prose,
        date: "Winter, 2024",
        likes: 156,
        saves: 42,
        author: "Eleanor Wells",
    },
    StoryTemplate {
        id: 2,
        title: "Leaves of Yesterday",
        excerpt: "Autumn leaves whisper tales of seasons past,\nTheir golden hues a testament to time,\nDancing on winds both gentle and vast,\nNature's poetry in motion sublime.",
        genre: Genre::Poetry,
        date: "Autumn, 2024",
        likes: 123,
        saves: 38,
        author: "Thomas Blake",
    },
    StoryTemplate {
        id: 3,
        title: "Letters from the Sea",
        excerpt: "The lighthouse keeper's daughter found the first bottle on a Tuesday morning, its glass worn smooth by the endless tides...",
        genre: Genre::ShortStory,
        date: "Spring, 2024",
        likes: 189,
        saves: 56,
        author: "Marie Laurent",
    },
    StoryTemplate {
        id: 4,
        title: "Morning Musings",
        excerpt: "Dawn breaks softly over the city walls,\nPainting shadows on ancient stone,\nWhile time slowly recalls,\nMemories we've known.",
        genre: Genre::Poetry,
        date: "Winter, 2024",
        likes: 144,
        saves: 47,
        author: "Christopher Reed",
    },
    StoryTemplate {
        id: 5,
        title: "Shadows of Tomorrow",
        excerpt: "Beneath the looming skyscrapers, a boy dreams of stars unseen, of places untouched by the chaos of modern life...",
        genre: Genre::Prose,
        date: "Summer, 2024",
        likes: 132,
        saves: 34,
        author: "Amelia Kent",
    },
    StoryTemplate {
        id: 6,
        title: "Echoes in the Fog",
        excerpt: "A lone figure moved through the dense fog, their footsteps echoing against cobblestones worn by centuries of history...",
        genre: Genre::ShortStory,
        date: "Autumn, 2024",
        likes: 203,
        saves: 63,
        author: "Nathaniel Grey",
    },
    StoryTemplate {
        id: 7,
        title: "Rain's Serenade",
        excerpt: "The rain plays its soft symphony on the windowpanes,\nEach drop a note, each pause a rest,\nNature's lullaby for the weary souls...",
        genre: Genre::Poetry,
        date: "Monsoon, 2024",
        likes: 158,
        saves: 41,
        author: "Isabella Hart",
    },
    StoryTemplate {
        id: 8,
        title: "The Keeper of Lanterns",
        excerpt: "Every night, as the village slept, she walked the cobbled streets, lighting the lanterns and carrying stories in her wake...",
        genre: Genre::Prose,
        date: "Winter, 2024",
        likes: 187,
        saves: 54,
        author: "Julia Marlowe",
    },
    StoryTemplate {
        id: 9,
        title: "Fragments of Dreams",
        excerpt: "In the silence of the midnight hour,\nDreams unravel their mysteries,\nWhispering secrets of the soul,\nIn fleeting moments of clarity.",
        genre: Genre::Poetry,
        date: "Spring, 2024",
        likes: 125,
        saves: 39,
        author: "Edward Holloway",
    },
    StoryTemplate {
        id: 10,
        title: "Beneath the Willow Tree",
        excerpt: "As children, they carved their names into the tree's bark, a promise to never forget, even as the years pulled them apart...",
        genre: Genre::ShortStory,
        date: "Summer, 2024",
        likes: 195,
        saves: 58,
        author: "Sophia Clarke",
    },
    StoryTemplate {
        id: 11,
        title: "Songs of the Wild",
        excerpt: "Deep in the heart of the forest, where sunlight barely touched the earth, the call of the wild sang in untamed harmony...",
        genre: Genre::Prose,
        date: "Autumn, 2024",
        likes: 145,
        saves: 46,
        author: "Oliver Grant",
    },
    StoryTemplate {
        id: 12,
        title: "Frost's Embrace",
        excerpt: "Winter wraps the world in its icy arms,\nA fleeting hush before spring's rebirth,\nIn its cold beauty, it charms,\nThe sleeping earth.",
        genre: Genre::Poetry,
        date: "Winter, 2024",
        likes: 139,
        saves: 37,
        author: "Lydia Vaughn",
    },
    StoryTemplate {
        id: 13,
        title: "The Clockmaker's Secret",
        excerpt: "In the quiet of his workshop, surrounded by ticking timepieces, the clockmaker worked tirelessly, guarding a secret older than time...",
        genre: Genre::ShortStory,
        date: "Spring, 2024",
        likes: 211,
        saves: 68,
        author: "Henry Adler",
    },
    StoryTemplate {
        id: 14,
        title: "Threads of Gold",
        excerpt: "In the bustling marketplace, amidst the chaos of voices and colors, she wove tales of ancient legends with threads of gold...",
        genre: Genre::Prose,
        date: "Summer, 2024",
        likes: 172,
        saves: 49,
        author: "Annabelle Frost",
    },
    StoryTemplate {
        id: 15,
        title: "Reflections at Dusk",
        excerpt: "As the sun dipped below the horizon, its final rays caught the edge of the lake, turning its surface into molten gold...",
        genre: Genre::Prose,
        date: "Autumn, 2024",
        likes: 167,
        saves: 43,
        author: "Samuel Beckett",
    },
    StoryTemplate {
        id: 16,
        title: "Whispers of the Wind",
        excerpt: "The wind carried stories of distant lands, its whispers echoing through the valleys and filling the night with mystery...",
        genre: Genre::Poetry,
        date: "Spring, 2024",
        likes: 133,
        saves: 44,
        author: "Fiona Harper",
    },
];
