use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::schema::ScoreSheet;
use crate::category::Category;
use crate::performance::RawPerformance;
use crate::tables::ScoringTables;

/// Load a score sheet from a YAML file
pub fn load_sheet(path: &Path) -> Result<ScoreSheet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read score sheet at {}", path.display()))?;

    let sheet: ScoreSheet = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse score sheet: invalid YAML in {}", path.display()))?;

    Ok(sheet)
}

/// Blank sheet with one empty entry per event of the category
pub fn blank_sheet(tables: &ScoringTables, category: Category) -> ScoreSheet {
    ScoreSheet {
        athlete: None,
        category: Some(category),
        performances: tables
            .table(category)
            .display_order()
            .iter()
            .map(|event| (event.to_string(), RawPerformance::Text(String::new())))
            .collect(),
    }
}

/// Write a blank score sheet template atomically.
///
/// Entries are written in display order with the expected unit as a comment,
/// which serializing the map directly would lose.
pub fn write_template(
    path: &Path,
    tables: &ScoringTables,
    category: Category,
    overwrite: bool,
) -> Result<()> {
    if path.exists() && !overwrite {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it",
            path.display()
        );
    }

    let table = tables.table(category);
    let mut out = String::new();
    out.push_str(&format!("# {}\n", category.label()));
    out.push_str("athlete: \"\"\n");
    out.push_str(&format!("category: {}\n", category.key()));
    out.push_str("performances:\n");
    for &event in table.display_order() {
        let hint = table.unit(event).map(|u| u.input_hint()).unwrap_or("");
        out.push_str(&format!("  {}: \"\"  # {}\n", quote_key(event), hint));
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(out.as_bytes())
        .context("Failed to write score sheet")?;
    file.commit().context("Failed to save score sheet")?;

    Ok(())
}

// Keys starting with a digit stay strings in YAML only if quoted
fn quote_key(event: &str) -> String {
    if event.starts_with(|c: char| c.is_ascii_digit()) {
        format!("\"{}\"", event)
    } else {
        event.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_blank_sheet_has_every_event() {
        let tables = ScoringTables::standard();
        let sheet = blank_sheet(&tables, Category::YouthU8toU12Competition);
        assert_eq!(sheet.performances.len(), 13);
        assert!(sheet.attempted().is_empty());
    }

    #[test]
    fn test_template_roundtrip() {
        let temp_path = env::temp_dir().join("athletics_points_test_template.yaml");
        let _ = fs::remove_file(&temp_path);

        let tables = ScoringTables::standard();
        write_template(&temp_path, &tables, Category::SeniorWomenCombined, false).unwrap();
        let loaded = load_sheet(&temp_path).unwrap();

        assert_eq!(loaded.category, Some(Category::SeniorWomenCombined));
        assert_eq!(loaded, {
            let mut expected = blank_sheet(&tables, Category::SeniorWomenCombined);
            expected.athlete = Some(String::new());
            expected
        });

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_template_refuses_overwrite() {
        let temp_path = env::temp_dir().join("athletics_points_test_overwrite.yaml");
        fs::write(&temp_path, "keep me").unwrap();

        let tables = ScoringTables::standard();
        let result = write_template(&temp_path, &tables, Category::MenCompetition, false);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&temp_path).unwrap(), "keep me");

        write_template(&temp_path, &tables, Category::MenCompetition, true).unwrap();
        assert!(load_sheet(&temp_path).is_ok());

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_load_missing_sheet_fails() {
        let temp_path = env::temp_dir().join("athletics_points_test_missing_sheet.yaml");
        let _ = fs::remove_file(&temp_path);
        assert!(load_sheet(&temp_path).is_err());
    }
}
