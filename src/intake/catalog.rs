//! # Tech Catalog
//!
//! The ordered list of technology labels offered as chips in the tech-stack
//! panel. The catalog is injected configuration (see [`crate::ui::config`]),
//! not a hardcoded constant, so deployments can offer different stacks
//! without touching the interaction logic.
//!
//! The catalog is a display concern only: [`super::TechSelection`] accepts
//! any label, whether or not it appears here.

/// Sentinel label meaning "no explicit preference".
///
/// Mutually exclusive with every concrete label: selecting it clears the
/// selection, and selecting anything concrete removes it.
pub const SUGGEST_LABEL: &str = "Suggest me";

/// Immutable, ordered list of selectable technology labels.
///
/// The sentinel is always present and always first, so the fallback selection
/// has a chip to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechCatalog {
    labels: Vec<String>,
}

impl TechCatalog {
    /// Build a catalog from the given labels, preserving their order.
    ///
    /// The sentinel is moved (or added) to the front; duplicates are dropped,
    /// keeping the first occurrence.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = vec![SUGGEST_LABEL.to_string()];
        for label in labels {
            let label = label.into();
            if !out.contains(&label) {
                out.push(label);
            }
        }
        Self { labels: out }
    }

    /// All labels in display order, sentinel first.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of chips to render.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// The catalog always contains at least the sentinel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether a label is part of the catalog.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Label at a chip position, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}

impl Default for TechCatalog {
    /// The catalog shipped by the hosted deployment.
    fn default() -> Self {
        Self::new([
            "Next.js",
            "React",
            "Express",
            "Node.js",
            "TypeScript",
            "Vue",
            "Angular",
            "Svelte",
            "Python",
            "Django",
            "FastAPI",
            "Flask",
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "Tailwind CSS",
            "Prisma",
            "tRPC",
            "GraphQL",
        ])
    }
}
