//! Baseline reference data inserted on first run.
//!
//! Seeding is count-based: each collection is populated only when it is
//! empty, so the routine is safe to call on every startup. The default
//! category and tag payloads (names and ordering) are part of the observable
//! first-run behavior and must not be reordered.

use rusqlite::{params, Connection};

use crate::error::Result;

/// Whether to also insert the bundled sample websites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Categories and tags only.
    Standard,
    /// Categories, tags, and the sample website set (development data).
    Development,
}

/// Default categories: (name, icon name).
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("大模型", "robot"),
    ("图像生成", "image"),
    ("编程助手", "code-tags"),
    ("音频/语音", "volume-high"),
    ("视频生成", "movie-open"),
    ("数据分析", "chart-line"),
    ("文本处理", "format-text"),
];

/// Default tags, all starting with a usage count of 0.
pub const DEFAULT_TAGS: &[&str] = &[
    "免费",
    "付费",
    "中文界面",
    "英文界面",
    "需要注册",
    "无需注册",
    "开源",
    "闭源",
    "无需APIKey",
];

/// A sample website entry: (name, url, description, category ids, tag ids).
///
/// Category/tag ids refer to the seeded defaults (1..=7 and 1..=9). Icons are
/// empty buffers.
type SampleSite = (&'static str, &'static str, &'static str, &'static [i64], &'static [i64]);

const SAMPLE_WEBSITES: &[SampleSite] = &[
    ("ChatGPT", "https://chat.openai.com", "OpenAI 对话式大模型", &[1], &[2, 4, 5]),
    ("Claude", "https://claude.ai", "Anthropic 大模型助手", &[1], &[1, 4, 5]),
    ("文心一言", "https://yiyan.baidu.com", "百度大模型", &[1], &[1, 3, 5]),
    ("Midjourney", "https://www.midjourney.com", "图像生成工具", &[2], &[2, 4, 5]),
    (
        "Stable Diffusion WebUI",
        "https://github.com/AUTOMATIC1111/stable-diffusion-webui",
        "开源图像生成",
        &[2],
        &[1, 6, 7],
    ),
    ("GitHub Copilot", "https://github.com/features/copilot", "编程助手", &[3], &[2, 4, 5]),
    ("Cursor", "https://www.cursor.com", "AI 代码编辑器", &[3], &[1, 4, 5]),
    ("ElevenLabs", "https://elevenlabs.io", "语音合成", &[4], &[2, 4, 5]),
    ("Suno", "https://suno.com", "AI 音乐生成", &[4], &[1, 4, 5]),
    ("Runway", "https://runwayml.com", "视频生成", &[5], &[2, 4, 5]),
    ("Julius AI", "https://julius.ai", "数据分析助手", &[6], &[2, 4, 5]),
    ("DeepL", "https://www.deepl.com", "翻译与文本处理", &[7], &[1, 4, 6, 9]),
];

/// Ensure baseline reference data exists. No-op for every collection that
/// already has records.
pub fn seed_database(conn: &Connection, mode: SeedMode) -> Result<()> {
    let category_count: i64 =
        conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
    if category_count == 0 {
        for (name, icon_name) in DEFAULT_CATEGORIES {
            conn.execute(
                "INSERT INTO categories (name, icon_name) VALUES (?1, ?2)",
                params![name, icon_name],
            )?;
        }
        tracing::info!(count = DEFAULT_CATEGORIES.len(), "categories seeded");
    }

    let tag_count: i64 = conn.query_row("SELECT COUNT(*) FROM tags", [], |row| row.get(0))?;
    if tag_count == 0 {
        for name in DEFAULT_TAGS {
            conn.execute(
                "INSERT INTO tags (name, count) VALUES (?1, 0)",
                params![name],
            )?;
        }
        tracing::info!(count = DEFAULT_TAGS.len(), "tags seeded");
    }

    if mode == SeedMode::Development {
        let website_count: i64 =
            conn.query_row("SELECT COUNT(*) FROM websites", [], |row| row.get(0))?;
        if website_count == 0 {
            let now = chrono::Utc::now().to_rfc3339();
            for (name, url, description, category_ids, tag_ids) in SAMPLE_WEBSITES {
                conn.execute(
                    "INSERT INTO websites \
                     (name, url, icon, icon_mime_type, description, api_keys, category_ids, tag_ids, created_at, updated_at) \
                     VALUES (?1, ?2, x'', '', ?3, '[]', ?4, ?5, ?6, ?6)",
                    params![
                        name,
                        url,
                        description,
                        serde_json::to_string(category_ids)?,
                        serde_json::to_string(tag_ids)?,
                        now,
                    ],
                )?;
            }
            tracing::info!(count = SAMPLE_WEBSITES.len(), "sample websites seeded");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::init_schema(&conn).unwrap();
        crate::db::migrations::run_migrations(&conn).unwrap();
        conn
    }

    fn count(conn: &Connection, table: &str) -> i64 {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn fresh_db_seeds_defaults() {
        let conn = test_db();
        seed_database(&conn, SeedMode::Standard).unwrap();

        assert_eq!(count(&conn, "categories"), 7);
        assert_eq!(count(&conn, "tags"), 9);
        assert_eq!(count(&conn, "websites"), 0);
    }

    #[test]
    fn development_mode_seeds_sample_websites() {
        let conn = test_db();
        seed_database(&conn, SeedMode::Development).unwrap();

        assert_eq!(count(&conn, "websites"), 12);
    }

    #[test]
    fn seeding_is_noop_once_data_exists() {
        let conn = test_db();
        seed_database(&conn, SeedMode::Development).unwrap();
        seed_database(&conn, SeedMode::Development).unwrap();

        assert_eq!(count(&conn, "categories"), 7);
        assert_eq!(count(&conn, "tags"), 9);
        assert_eq!(count(&conn, "websites"), 12);
    }

    #[test]
    fn one_existing_category_suppresses_category_seeding() {
        let conn = test_db();
        conn.execute(
            "INSERT INTO categories (name, icon_name) VALUES ('自定义', 'star')",
            [],
        )
        .unwrap();

        seed_database(&conn, SeedMode::Standard).unwrap();

        // category seeding skipped, tag seeding still runs
        assert_eq!(count(&conn, "categories"), 1);
        assert_eq!(count(&conn, "tags"), 9);
    }

    #[test]
    fn seeded_tags_start_at_zero() {
        let conn = test_db();
        seed_database(&conn, SeedMode::Standard).unwrap();

        let max: i64 = conn
            .query_row("SELECT MAX(count) FROM tags", [], |row| row.get(0))
            .unwrap();
        assert_eq!(max, 0);
    }

    #[test]
    fn sample_references_stay_in_seeded_ranges() {
        for (_, _, _, category_ids, tag_ids) in SAMPLE_WEBSITES {
            assert!(category_ids
                .iter()
                .all(|id| (1..=DEFAULT_CATEGORIES.len() as i64).contains(id)));
            assert!(tag_ids
                .iter()
                .all(|id| (1..=DEFAULT_TAGS.len() as i64).contains(id)));
        }
    }
}
