use crate::error::ClassifyError;
use crate::waste_category::WasteCategory;
use std::path::Path;

/// One line of the label resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// The line exactly as read, including the index prefix and newline.
    pub raw: String,
    pub name: String,
    /// `None` when the name is not one of the nine known categories.
    pub category: Option<WasteCategory>,
}

/// Labels in model output order. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    labels: Vec<Label>,
}

impl LabelTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifyError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            ClassifyError::label_table(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
    }

    /// Parses `"<index> <CategoryName>\n"` lines. Blank lines are rejected so
    /// positions stay aligned with the model output.
    pub fn parse(text: &str) -> Result<Self, ClassifyError> {
        let mut labels = Vec::new();

        for (position, raw) in text.split_inclusive('\n').enumerate() {
            let line = raw.trim_end_matches(['\r', '\n']);
            let (index, name) = line.split_once(' ').ok_or_else(|| {
                ClassifyError::label_table(format!(
                    "line {}: expected \"<index> <name>\", got {:?}",
                    position + 1,
                    line
                ))
            })?;

            let index: usize = index.parse().map_err(|_| {
                ClassifyError::label_table(format!(
                    "line {}: invalid index {:?}",
                    position + 1,
                    index
                ))
            })?;

            if index != position {
                return Err(ClassifyError::label_table(format!(
                    "line {}: index {} out of order",
                    position + 1,
                    index
                )));
            }

            let name = name.trim().to_string();
            labels.push(Label {
                raw: raw.to_string(),
                category: WasteCategory::from_name(&name),
                name,
            });
        }

        if labels.is_empty() {
            return Err(ClassifyError::label_table("no labels"));
        }

        Ok(Self { labels })
    }

    /// The nine categories in canonical order, formatted as the resource file is.
    pub fn standard() -> Self {
        Self {
            labels: WasteCategory::ALL
                .iter()
                .map(|category| Label {
                    raw: format!("{} {}\n", category.index(), category.name()),
                    name: category.name().to_string(),
                    category: Some(*category),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn get(&self, index: usize) -> Option<&Label> {
        self.labels.get(index)
    }
}
