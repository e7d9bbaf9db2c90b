use super::Finding;
use std::collections::HashMap;

/// Findings of a single file, sorted by line
#[derive(Debug, Clone)]
pub struct FileGroup<'a> {
    pub file: &'a str,
    pub findings: Vec<&'a Finding>,
}

/// Findings partitioned by file.
///
/// Files appear in the order they were first seen in the input; within a
/// file, findings are sorted by line and findings on the same line keep
/// their input order.
#[derive(Debug, Clone, Default)]
pub struct GroupedReport<'a> {
    groups: Vec<FileGroup<'a>>,
}

impl<'a> GroupedReport<'a> {
    pub fn groups(&self) -> &[FileGroup<'a>] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileGroup<'a>> {
        self.groups.iter()
    }

    pub fn get(&self, file: &str) -> Option<&FileGroup<'a>> {
        self.groups.iter().find(|g| g.file == file)
    }

    /// Number of distinct files
    pub fn file_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of findings across all files
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.findings.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group findings by their `file` string
pub fn group_by_file(findings: &[Finding]) -> GroupedReport<'_> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<FileGroup<'_>> = Vec::new();

    for finding in findings {
        let slot = *index.entry(finding.file.as_str()).or_insert_with(|| {
            groups.push(FileGroup {
                file: finding.file.as_str(),
                findings: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].findings.push(finding);
    }

    // sort_by_key is stable
    for group in &mut groups {
        group.findings.sort_by_key(|f| f.line);
    }

    GroupedReport { groups }
}
