use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Age,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "age" => Some(SortKey::Age),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cards" => Some(ViewMode::Cards),
            "table" => Some(ViewMode::Table),
            _ => None,
        }
    }

    pub fn page_size(&self) -> usize {
        match self {
            ViewMode::Cards => 6,
            ViewMode::Table => 12,
        }
    }
}
