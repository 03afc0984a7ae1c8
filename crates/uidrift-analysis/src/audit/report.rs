//! Audit report over extracted literal values.

use uidrift_core::types::collections::{FxHashMap, FxHashSet};

use super::types::{AuditCategory, AuditReport, AuditValue, CategoryReport, FileReport, ValueCount};

/// Values listed per category in `most_common`.
pub const MOST_COMMON_LIMIT: usize = 5;

/// Files listed in `worst_files`.
pub const WORST_FILES_LIMIT: usize = 10;

/// Points lost per unique value above a category's ideal.
const EXCESS_UNIQUE_PENALTY: f64 = 2.0;

/// Cap on the volume penalty (`total / 10`).
const MAX_VOLUME_PENALTY: f64 = 20.0;

struct CategoryAccumulator {
    category: AuditCategory,
    total: usize,
    /// Value counts in first-appearance order.
    counts: Vec<ValueCount>,
    index: FxHashMap<String, usize>,
}

/// Group literal occurrences by category and file, and score the spread.
///
/// Categories and ties keep first-appearance order. Empty input scores 100.
pub fn generate_audit_report(values: &[AuditValue]) -> AuditReport {
    let mut categories: Vec<CategoryAccumulator> = Vec::new();
    let mut files: Vec<FileReport> = Vec::new();
    let mut file_index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut unique: FxHashSet<(AuditCategory, &str)> = FxHashSet::default();

    for v in values {
        unique.insert((v.category, v.value.as_str()));

        let acc = match categories.iter().position(|c| c.category == v.category) {
            Some(i) => &mut categories[i],
            None => {
                categories.push(CategoryAccumulator {
                    category: v.category,
                    total: 0,
                    counts: Vec::new(),
                    index: FxHashMap::default(),
                });
                let last = categories.len() - 1;
                &mut categories[last]
            }
        };
        acc.total += 1;
        match acc.index.get(&v.value) {
            Some(&i) => acc.counts[i].count += 1,
            None => {
                acc.index.insert(v.value.clone(), acc.counts.len());
                acc.counts.push(ValueCount {
                    value: v.value.clone(),
                    count: 1,
                });
            }
        }

        match file_index.get(v.file.as_str()) {
            Some(&i) => files[i].count += 1,
            None => {
                file_index.insert(v.file.as_str(), files.len());
                files.push(FileReport {
                    file: v.file.clone(),
                    count: 1,
                });
            }
        }
    }

    let categories: Vec<CategoryReport> = categories
        .into_iter()
        .map(|mut acc| {
            let unique_count = acc.counts.len();
            acc.counts.sort_by(|a, b| b.count.cmp(&a.count));
            acc.counts.truncate(MOST_COMMON_LIMIT);
            CategoryReport {
                category: acc.category,
                unique_count,
                total_count: acc.total,
                most_common: acc.counts,
            }
        })
        .collect();

    files.sort_by(|a, b| b.count.cmp(&a.count));
    files.truncate(WORST_FILES_LIMIT);

    let score = audit_score(&categories, values.len());

    AuditReport {
        total_values: values.len(),
        unique_values: unique.len(),
        categories,
        worst_files: files,
        score,
    }
}

fn audit_score(categories: &[CategoryReport], total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    let excess: f64 = categories
        .iter()
        .map(|c| c.unique_count.saturating_sub(c.category.ideal_unique()) as f64)
        .sum();
    let volume = (total as f64 / 10.0).min(MAX_VOLUME_PENALTY);
    (100.0 - EXCESS_UNIQUE_PENALTY * excess - volume)
        .clamp(0.0, 100.0)
        .round() as u32
}
