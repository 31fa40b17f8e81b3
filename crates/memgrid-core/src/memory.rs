//! Memory content table.
//!
//! One [`Memory`] per grid slot, generated as placeholders at mount and
//! edited in place from the detail overlay. Nothing is persisted.

use serde::{Deserialize, Serialize};

use memgrid_types::error::{GridError, Result};

use crate::layout::GridLayout;
use crate::slot::GlobalSlotId;

/// Title shown for a memory whose title is blank.
pub const UNTITLED: &str = "Sans titre";

const PLACEHOLDER_DESCRIPTION: &str =
    "Cet emplacement est disponible. Ajoutez une vidéo ou un contenu pour le remplir.";

/// Content attached to one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl Memory {
    fn placeholder(category: &str, item: usize) -> Self {
        Self {
            id: format!("{}-{item}", category.to_lowercase()),
            category: category.to_string(),
            title: format!("Emplacement {}", item + 1),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            video_url: None,
            thumbnail_url: None,
        }
    }

    pub fn video_id(&self) -> Option<&str> {
        self.video_url.as_deref().and_then(extract_youtube_id)
    }

    /// A memory is filled once it links a playable video.
    pub fn has_video(&self) -> bool {
        self.video_id().is_some()
    }

    /// Custom thumbnail first, then the video's thumbnail.
    pub fn thumbnail(&self) -> Option<String> {
        match self.thumbnail_url.as_deref() {
            Some(url) if !url.is_empty() => Some(url.to_string()),
            _ => self.video_id().map(youtube_thumbnail),
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }
}

/// Fields the overlay can change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEdit {
    pub title: String,
    pub description: String,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl From<&Memory> for MemoryEdit {
    fn from(m: &Memory) -> Self {
        Self {
            title: m.title.clone(),
            description: m.description.clone(),
            video_url: m.video_url.clone(),
            thumbnail_url: m.thumbnail_url.clone(),
        }
    }
}

/// Extract a YouTube video id.
///
/// Accepts a bare 11-character id, `youtube.com/watch?v=ID`,
/// `youtu.be/ID` and `.../embed/ID` URLs.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    if is_bare_video_id(url) {
        return Some(url);
    }

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let rest = rest.split('#').next().unwrap_or_default();
    let (authority, path_and_query) = match rest.find(['/', '?']) {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    let host = authority.rsplit('@').next().unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();
    let (path, query) = match path_and_query.split_once('?') {
        Some((p, q)) => (p, q),
        None => (path_and_query, ""),
    };

    let id = if host.contains("youtube.com") && query_param(query, "v").is_some() {
        query_param(query, "v")
    } else if host == "youtu.be" {
        path.strip_prefix('/')
    } else if let Some((_, after)) = path.split_once("/embed/") {
        after.split('/').next()
    } else {
        None
    };
    id.filter(|id| !id.is_empty())
}

fn is_bare_video_id(s: &str) -> bool {
    s.len() == 11
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

pub fn youtube_thumbnail(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")
}

/// All memories of a grid, addressed by [`GlobalSlotId`].
#[derive(Debug, Clone)]
pub struct MemoryStore {
    memories: Vec<Memory>,
}

impl MemoryStore {
    /// One placeholder per slot, category-major.
    pub fn placeholders(layout: &GridLayout) -> Self {
        let ipc = layout.items_per_category();
        let memories = layout
            .categories()
            .iter()
            .flat_map(|category| (0..ipc).map(move |item| Memory::placeholder(category, item)))
            .collect();
        Self { memories }
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }

    pub fn get(&self, slot: GlobalSlotId) -> Option<&Memory> {
        self.memories.get(slot.0)
    }

    /// Overwrite the editable fields of a slot.
    pub fn update(&mut self, slot: GlobalSlotId, edit: MemoryEdit) -> Result<&Memory> {
        let memory = self
            .memories
            .get_mut(slot.0)
            .ok_or(GridError::UnknownSlot(slot.0))?;
        memory.title = edit.title;
        memory.description = edit.description;
        memory.video_url = edit.video_url.filter(|u| !u.trim().is_empty());
        memory.thumbnail_url = edit.thumbnail_url.filter(|u| !u.trim().is_empty());
        log::info!("Updated memory {} (slot {slot})", memory.id);
        Ok(memory)
    }

    /// Number of memories that link a video.
    pub fn filled_count(&self) -> usize {
        self.memories.iter().filter(|m| m.has_video()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::default_layout;

    #[test]
    fn bare_id() {
        assert_eq!(extract_youtube_id("dQw4w9WgXcQ"), Some("dQw4w9WgXcQ"));
        assert_eq!(extract_youtube_id("short"), None);
        assert_eq!(extract_youtube_id("dQw4w9WgXc!"), None);
    }

    #[test]
    fn watch_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_youtube_id("https://m.youtube.com/watch?feature=share&v=jNQXAC9IVRw"),
            Some("jNQXAC9IVRw")
        );
    }

    #[test]
    fn short_url() {
        assert_eq!(
            extract_youtube_id("https://youtu.be/kJQP7kiw5Fk"),
            Some("kJQP7kiw5Fk")
        );
        assert_eq!(
            extract_youtube_id("http://youtu.be/kJQP7kiw5Fk?si=abc"),
            Some("kJQP7kiw5Fk")
        );
    }

    #[test]
    fn embed_url() {
        assert_eq!(
            extract_youtube_id("https://www.youtube.com/embed/9bZkp7q19f0/extra"),
            Some("9bZkp7q19f0")
        );
    }

    #[test]
    fn rejected_urls() {
        assert_eq!(extract_youtube_id(""), None);
        assert_eq!(extract_youtube_id("not a url"), None);
        assert_eq!(extract_youtube_id("ftp://youtu.be/abc"), None);
        assert_eq!(extract_youtube_id("https://example.com/watch?v=abc"), None);
        assert_eq!(extract_youtube_id("https://youtu.be/"), None);
        assert_eq!(extract_youtube_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn thumbnail_priority() {
        let mut m = Memory::placeholder("Clubs", 0);
        assert_eq!(m.thumbnail(), None);
        m.video_url = Some("https://youtu.be/kJQP7kiw5Fk".into());
        assert_eq!(
            m.thumbnail().as_deref(),
            Some("https://img.youtube.com/vi/kJQP7kiw5Fk/mqdefault.jpg")
        );
        m.thumbnail_url = Some("https://cdn.example/c.jpg".into());
        assert_eq!(m.thumbnail().as_deref(), Some("https://cdn.example/c.jpg"));
    }

    #[test]
    fn placeholders_cover_every_slot() {
        let store = MemoryStore::placeholders(&default_layout());
        assert_eq!(store.len(), 100);
        assert_eq!(store.filled_count(), 0);
        let m = store.get(GlobalSlotId(45)).unwrap();
        assert_eq!(m.id, "clubs-5");
        assert_eq!(m.title, "Emplacement 6");
        assert_eq!(store.get(GlobalSlotId(0)).unwrap().id, "partenaires-0");
        assert_eq!(store.get(GlobalSlotId(99)).unwrap().id, "atelier-19");
        assert!(store.get(GlobalSlotId(100)).is_none());
    }

    #[test]
    fn update_replaces_fields() {
        let mut store = MemoryStore::placeholders(&default_layout());
        let edit = MemoryEdit {
            title: "Soirée".into(),
            description: "Photos".into(),
            video_url: Some("dQw4w9WgXcQ".into()),
            thumbnail_url: Some("   ".into()),
        };
        let m = store.update(GlobalSlotId(3), edit).unwrap();
        assert_eq!(m.title, "Soirée");
        assert!(m.has_video());
        assert_eq!(m.thumbnail_url, None);
        assert_eq!(store.filled_count(), 1);
    }

    #[test]
    fn update_unknown_slot_fails() {
        let mut store = MemoryStore::placeholders(&default_layout());
        let err = store.update(GlobalSlotId(500), MemoryEdit::default()).unwrap_err();
        assert!(matches!(err, GridError::UnknownSlot(500)));
    }

    #[test]
    fn blank_title_displays_untitled() {
        let mut m = Memory::placeholder("Culture", 2);
        m.title = "  ".into();
        assert_eq!(m.display_title(), UNTITLED);
    }
}
