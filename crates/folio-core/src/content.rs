use crate::orbit::OrbitItem;

// (name, glyph, base angle in degrees)
pub const ORBIT_TECH: [(&str, &str, f64); 12] = [
    ("React", "⚛️", 0.0),
    ("Node.js", "🟢", 30.0),
    ("Python", "🐍", 60.0),
    ("AWS", "☁️", 90.0),
    ("Docker", "🐳", 120.0),
    ("TypeScript", "📘", 150.0),
    ("PostgreSQL", "🐘", 180.0),
    ("MongoDB", "🍃", 210.0),
    ("Kubernetes", "☸️", 240.0),
    ("GraphQL", "◈", 270.0),
    ("TensorFlow", "🤖", 300.0),
    ("Rust", "🦀", 330.0),
];

pub fn orbit_items() -> Vec<OrbitItem> {
    ORBIT_TECH
        .iter()
        .map(|&(name, glyph, angle)| OrbitItem::new(name, glyph, angle))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillKind {
    Frontend,
    Backend,
    Language,
    Database,
    Cloud,
    DevOps,
    MachineLearning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechSkill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
    pub kind: SkillKind,
}

impl TechSkill {
    pub const fn new(name: &'static str, level: u8, kind: SkillKind) -> Self {
        Self { name, level, kind }
    }
}

pub const TECH_STACK: [TechSkill; 12] = [
    TechSkill::new("React", 95, SkillKind::Frontend),
    TechSkill::new("TypeScript", 90, SkillKind::Language),
    TechSkill::new("Node.js", 88, SkillKind::Backend),
    TechSkill::new("Python", 85, SkillKind::Language),
    TechSkill::new("AWS", 82, SkillKind::Cloud),
    TechSkill::new("Docker", 78, SkillKind::DevOps),
    TechSkill::new("PostgreSQL", 85, SkillKind::Database),
    TechSkill::new("MongoDB", 80, SkillKind::Database),
    TechSkill::new("Kubernetes", 75, SkillKind::DevOps),
    TechSkill::new("GraphQL", 82, SkillKind::Backend),
    TechSkill::new("TensorFlow", 70, SkillKind::MachineLearning),
    TechSkill::new("Rust", 65, SkillKind::Language),
];

pub const ADDITIONAL_TECH: [&str; 17] = [
    "Git", "CI/CD", "REST APIs", "Microservices", "Agile", "Scrum", "Jest", "Cypress", "Webpack",
    "Vite", "Next.js", "Express", "Redis", "Elasticsearch", "Apache Kafka", "gRPC", "Selenium",
];

#[derive(Clone, Debug, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: Vec<TechSkill>,
}

const CATEGORIES: [(&str, &[SkillKind]); 5] = [
    ("Frontend Development", &[SkillKind::Frontend]),
    ("Backend Development", &[SkillKind::Backend]),
    ("Cloud & DevOps", &[SkillKind::Cloud, SkillKind::DevOps]),
    ("Languages & Databases", &[SkillKind::Language, SkillKind::Database]),
    ("AI & Machine Learning", &[SkillKind::MachineLearning]),
];

/// Group `stack` into the display categories, keeping stack order inside each.
pub fn skill_categories(stack: &[TechSkill]) -> Vec<SkillCategory> {
    CATEGORIES
        .iter()
        .map(|&(title, kinds)| SkillCategory {
            title,
            skills: stack
                .iter()
                .filter(|s| kinds.contains(&s.kind))
                .copied()
                .collect(),
        })
        .collect()
}
