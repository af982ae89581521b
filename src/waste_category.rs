use std::fmt;

/// The nine waste classes the model was trained on, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WasteCategory {
    Paper,
    Plastic,
    Glass,
    Metal,
    Organic,
    EWaste,
    TextileClothing,
    Landfill,
    Cardboard,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 9] = [
        WasteCategory::Paper,
        WasteCategory::Plastic,
        WasteCategory::Glass,
        WasteCategory::Metal,
        WasteCategory::Organic,
        WasteCategory::EWaste,
        WasteCategory::TextileClothing,
        WasteCategory::Landfill,
        WasteCategory::Cardboard,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    #[allow(dead_code)]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Name as written in the label resource.
    pub fn name(self) -> &'static str {
        match self {
            WasteCategory::Paper => "Paper",
            WasteCategory::Plastic => "Plastic",
            WasteCategory::Glass => "Glass",
            WasteCategory::Metal => "Metal",
            WasteCategory::Organic => "Organic",
            WasteCategory::EWaste => "E-Waste",
            WasteCategory::TextileClothing => "Textile/Clothing",
            WasteCategory::Landfill => "Landfill",
            WasteCategory::Cardboard => "Cardboard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.name() == name)
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
