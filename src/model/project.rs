//! Project description with classified tools and materials.

use serde::{Deserialize, Serialize};

use super::AuthoredSlice;

/// Skill level a project targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// What a tool is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Cutting,
    Measuring,
    Sanding,
    Assembly,
    Finishing,
    General,
}

/// What a material is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Lumber,
    Adhesive,
    Fastener,
    Finish,
    Abrasive,
}

/// Lowercased words of a name, with a trailing plural `s` dropped.
fn words(name: &str) -> Vec<String> {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let w = w.to_lowercase();
            match w.strip_suffix('s') {
                Some(stem) if stem.len() >= 3 && !stem.ends_with('s') => stem.to_string(),
                _ => w,
            }
        })
        .collect()
}

fn any_word(words: &[String], keywords: &[&str]) -> bool {
    words.iter().any(|w| keywords.contains(&w.as_str()))
}

impl ToolCategory {
    /// Classify a tool by the words in its name.
    pub fn classify(name: &str) -> Self {
        let words = words(name);
        if any_word(&words, &["sander", "sandpaper", "sanding", "file", "rasp"]) {
            ToolCategory::Sanding
        } else if any_word(
            &words,
            &[
                "measure", "measuring", "tape", "square", "ruler", "level", "gauge", "caliper",
            ],
        ) {
            ToolCategory::Measuring
        } else if words.iter().any(|w| w.ends_with("saw"))
            || any_word(&words, &["chisel", "knife", "router", "plane"])
        {
            ToolCategory::Cutting
        } else if any_word(
            &words,
            &[
                "clamp",
                "drill",
                "hammer",
                "mallet",
                "screwdriver",
                "driver",
                "nailer",
            ],
        ) {
            ToolCategory::Assembly
        } else if any_word(&words, &["brush", "rag", "sprayer", "applicator"]) {
            ToolCategory::Finishing
        } else {
            ToolCategory::General
        }
    }

    /// Tools used while preparing stock.
    pub fn is_preparation(&self) -> bool {
        matches!(
            self,
            ToolCategory::Cutting | ToolCategory::Measuring | ToolCategory::Sanding
        )
    }
}

impl MaterialCategory {
    /// Classify a material by the words in its name.
    pub fn classify(name: &str) -> Self {
        let words = words(name);
        if any_word(&words, &["sandpaper", "abrasive", "wool"]) {
            MaterialCategory::Abrasive
        } else if any_word(&words, &["glue", "epoxy", "adhesive"]) {
            MaterialCategory::Adhesive
        } else if any_word(
            &words,
            &["screw", "nail", "bolt", "dowel", "brad", "hinge", "biscuit"],
        ) {
            MaterialCategory::Fastener
        } else if any_word(
            &words,
            &[
                "stain",
                "finish",
                "varnish",
                "polyurethane",
                "oil",
                "wax",
                "paint",
                "lacquer",
                "shellac",
            ],
        ) {
            MaterialCategory::Finish
        } else {
            MaterialCategory::Lumber
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ToolRepr {
    Name(String),
    Full {
        name: String,
        category: Option<ToolCategory>,
    },
}

/// A tool required by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ToolRepr")]
pub struct Tool {
    pub name: String,
    pub category: ToolCategory,
}

impl Tool {
    /// Create a tool, classifying it from its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            category: ToolCategory::classify(&name),
            name,
        }
    }

    /// Create a tool with an explicit category.
    pub fn with_category(name: impl Into<String>, category: ToolCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

impl From<ToolRepr> for Tool {
    fn from(repr: ToolRepr) -> Self {
        match repr {
            ToolRepr::Name(name) => Tool::new(name),
            ToolRepr::Full {
                name,
                category: Some(category),
            } => Tool::with_category(name, category),
            ToolRepr::Full {
                name,
                category: None,
            } => Tool::new(name),
        }
    }
}

impl From<&str> for Tool {
    fn from(name: &str) -> Self {
        Tool::new(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaterialRepr {
    Name(String),
    Full {
        name: String,
        category: Option<MaterialCategory>,
    },
}

/// A material required by a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MaterialRepr")]
pub struct Material {
    pub name: String,
    pub category: MaterialCategory,
}

impl Material {
    /// Create a material, classifying it from its name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            category: MaterialCategory::classify(&name),
            name,
        }
    }

    /// Create a material with an explicit category.
    pub fn with_category(name: impl Into<String>, category: MaterialCategory) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

impl From<MaterialRepr> for Material {
    fn from(repr: MaterialRepr) -> Self {
        match repr {
            MaterialRepr::Name(name) => Material::new(name),
            MaterialRepr::Full {
                name,
                category: Some(category),
            } => Material::with_category(name, category),
            MaterialRepr::Full {
                name,
                category: None,
            } => Material::new(name),
        }
    }
}

impl From<&str> for Material {
    fn from(name: &str) -> Self {
        Material::new(name)
    }
}

/// A woodworking project as handed to the slicer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectDescription {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text category (e.g. "furniture").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    /// Externally authored lesson slices, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slices: Option<Vec<AuthoredSlice>>,
}

impl ProjectDescription {
    /// Create a project with no materials or tools.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Add materials by name.
    pub fn with_materials<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.materials.extend(names.into_iter().map(Material::new));
        self
    }

    /// Add tools by name.
    pub fn with_tools<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tools.extend(names.into_iter().map(Tool::new));
        self
    }

    /// Whether the project carries its own lesson slices.
    pub fn has_authored_slices(&self) -> bool {
        self.slices.as_ref().is_some_and(|s| !s.is_empty())
    }
}
