use serde::{Deserialize, Serialize};

/// Subject area a resource belongs to. Every resource has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI & Machine Learning")]
    Ai,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Web Development")]
    WebDev,
    #[serde(rename = "Cloud Computing")]
    Cloud,
    #[serde(rename = "DevOps")]
    DevOps,
    #[serde(rename = "System Design")]
    SystemDesign,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Ai,
        Category::DataScience,
        Category::WebDev,
        Category::Cloud,
        Category::DevOps,
        Category::SystemDesign,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Ai => "AI & Machine Learning",
            Category::DataScience => "Data Science",
            Category::WebDev => "Web Development",
            Category::Cloud => "Cloud Computing",
            Category::DevOps => "DevOps",
            Category::SystemDesign => "System Design",
        }
    }

    /// Short form accepted on the command line and stored in config.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::DataScience => "data",
            Category::WebDev => "web",
            Category::Cloud => "cloud",
            Category::DevOps => "devops",
            Category::SystemDesign => "system-design",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Ai => "🧠",
            Category::DataScience => "📊",
            Category::WebDev => "🌐",
            Category::Cloud => "☁️",
            Category::DevOps => "⚙️",
            Category::SystemDesign => "🏗️",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == needle || c.name().to_lowercase() == needle)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// What kind of thing a resource is (course, repo, video channel, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Course,
    Github,
    Youtube,
    Website,
    Certification,
    Pdf,
    Tweet,
    Free,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Course,
        ResourceKind::Github,
        ResourceKind::Youtube,
        ResourceKind::Website,
        ResourceKind::Certification,
        ResourceKind::Pdf,
        ResourceKind::Tweet,
        ResourceKind::Free,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Course => "Course",
            ResourceKind::Github => "GitHub",
            ResourceKind::Youtube => "YouTube",
            ResourceKind::Website => "Website",
            ResourceKind::Certification => "Certification",
            ResourceKind::Pdf => "PDF",
            ResourceKind::Tweet => "Tweet",
            ResourceKind::Free => "Free",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ResourceKind::Course => "course",
            ResourceKind::Github => "github",
            ResourceKind::Youtube => "youtube",
            ResourceKind::Website => "website",
            ResourceKind::Certification => "certification",
            ResourceKind::Pdf => "pdf",
            ResourceKind::Tweet => "tweet",
            ResourceKind::Free => "free",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.to_lowercase();
        ResourceKind::ALL
            .into_iter()
            .find(|k| k.slug() == needle)
            .ok_or_else(|| format!("Unknown resource type: {}", s))
    }
}

/// Experience level a resource targets. Optional: curated link dumps and
/// reference sites often have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Ordering rank for sorting, easiest first.
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "🟢 Beginner",
            Difficulty::Intermediate => "🟡 Intermediate",
            Difficulty::Advanced => "🔴 Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub provider: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub featured: bool,
}

/// An ordered, curated sequence of resource ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub resource_ids: Vec<String>,
}
