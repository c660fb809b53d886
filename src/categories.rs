//! Category Metadata
//!
//! Display names and icons for category ids, plus the embedded
//! category data document.

use leptos::logging::error;

use crate::models::CategoriesData;

const CATEGORIES_JSON: &str = include_str!("../assets/categories.json");

/// Parse the embedded categories.json. A broken document logs and
/// yields an empty site rather than a crash.
pub fn load_categories() -> CategoriesData {
    match serde_json::from_str(CATEGORIES_JSON) {
        Ok(data) => data,
        Err(err) => {
            error!("Failed to parse categories.json: {err}");
            CategoriesData::default()
        }
    }
}

/// Display name for a category id; unknown ids fall back to the id itself
pub fn category_name(category_id: &str) -> &str {
    match category_id {
        "batsu-game" => "罰ゲーム",
        "kokuhaku" => "告白",
        "haishin" => "配信",
        "chuunibyou" => "厨二病",
        other => other,
    }
}

/// Display id for a serifu id, e.g. "batsu-game-001" -> "罰ゲーム No.001"
pub fn display_id(serifu_id: &str) -> String {
    let (category_id, number) = serifu_id.rsplit_once('-').unwrap_or(("", serifu_id));
    format!("{} No.{}", category_name(category_id), number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_categories_parses_embedded_document() {
        let data = load_categories();
        assert!(!data.categories.is_empty());
        for category in &data.categories {
            assert!(!category.serifu.is_empty());
            for serifu in &category.serifu {
                assert!(serifu.id.starts_with(&category.id));
            }
        }
    }

    #[test]
    fn test_display_id() {
        assert_eq!(display_id("batsu-game-001"), "罰ゲーム No.001");
        assert_eq!(display_id("kokuhaku-012"), "告白 No.012");
    }

    #[test]
    fn test_unknown_category_falls_back_to_id() {
        assert_eq!(category_name("mystery"), "mystery");
        assert_eq!(display_id("mystery-003"), "mystery No.003");
    }
}
