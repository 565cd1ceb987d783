use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Append one record: every label followed by `" -> "`, then a blank-line
/// terminator. Labels go out verbatim, separator collisions and embedded
/// newlines included. An empty label list still writes the terminator, so
/// a category with no diagram leaves a visible empty record.
pub fn append_record(path: &Path, labels: &[String]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for append", path.display()))?;
    for label in labels {
        write!(file, "{label} -> ")?;
    }
    write!(file, "\n\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_for(labels: &[&str]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roadmaps.txt");
        let owned: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        append_record(&path, &owned).unwrap();
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn labels_joined_with_arrow_separator() {
        assert_eq!(record_for(&["A", "B", "C"]), "A -> B -> C -> \n\n");
    }

    #[test]
    fn empty_label_list_still_writes_terminator() {
        assert_eq!(record_for(&[]), "\n\n");
    }

    #[test]
    fn labels_written_verbatim_even_when_they_contain_the_separator() {
        assert_eq!(record_for(&["a -> b"]), "a -> b -> \n\n");
    }

    #[test]
    fn rerun_appends_rather_than_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roadmaps.txt");
        let labels = vec!["frontend".to_string()];
        append_record(&path, &labels).unwrap();
        let first = std::fs::read_to_string(&path).unwrap();
        append_record(&path, &labels).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();
        assert_eq!(second.len(), first.len() * 2);
        assert_eq!(second, first.repeat(2));
    }
}
