//! Project showcase content and the detail dialog selection.

use thiserror::Error;

/// Technology badges shown on a card before collapsing the rest into `+N`.
pub const CARD_TECH_PREVIEW: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("no project with id {0}")]
    UnknownProject(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    FullStack,
    Cloud,
    MachineLearning,
    RealTime,
    Blockchain,
    Iot,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::FullStack => "Full-Stack",
            Self::Cloud => "Cloud",
            Self::MachineLearning => "Machine Learning",
            Self::RealTime => "Real-Time",
            Self::Blockchain => "Blockchain",
            Self::Iot => "IoT",
        }
    }

    /// Placeholder artwork for cards and the dialog header.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::FullStack => "🌐",
            Self::Cloud => "☁️",
            Self::MachineLearning => "🤖",
            Self::RealTime => "⚡",
            Self::Blockchain => "⛓️",
            Self::Iot => "🏠",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
    pub category: ProjectCategory,
}

impl Project {
    /// The badges a card shows and how many technologies were left out.
    pub fn tech_preview(&self) -> (&'static [&'static str], usize) {
        let shown = self.technologies.len().min(CARD_TECH_PREVIEW);
        let hidden = self.technologies.len() - shown;
        (&self.technologies[..shown], hidden)
    }
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "AI-Powered Analytics Platform",
        description: "Real-time data analytics platform with machine learning insights",
        long_description: "A comprehensive analytics platform that leverages machine learning \
            algorithms to provide real-time insights and predictive analytics. Built with \
            microservices architecture for scalability and performance.",
        technologies: &["React", "Node.js", "Python", "TensorFlow", "PostgreSQL", "Redis"],
        features: &[
            "Real-time data processing",
            "ML-powered predictions",
            "Interactive dashboards",
            "Custom report generation",
            "API-first architecture",
        ],
        live_url: Some("https://example.com"),
        github_url: Some("https://github.com"),
        category: ProjectCategory::FullStack,
    },
    Project {
        id: 2,
        title: "Cloud-Native E-Commerce Solution",
        description: "Scalable e-commerce platform with microservices architecture",
        long_description: "Enterprise-grade e-commerce solution designed to handle millions of \
            transactions. Implements event-driven architecture and containerized microservices \
            for maximum scalability and reliability.",
        technologies: &["Next.js", "Go", "Kubernetes", "Docker", "MongoDB", "RabbitMQ"],
        features: &[
            "Microservices architecture",
            "Auto-scaling infrastructure",
            "Real-time inventory management",
            "Payment gateway integration",
            "Advanced search and filtering",
        ],
        live_url: Some("https://example.com"),
        github_url: Some("https://github.com"),
        category: ProjectCategory::Cloud,
    },
    Project {
        id: 3,
        title: "Machine Learning Pipeline",
        description: "Automated ML pipeline for model training and deployment",
        long_description: "End-to-end machine learning pipeline that automates data \
            preprocessing, model training, evaluation, and deployment. Supports multiple ML \
            frameworks and provides comprehensive monitoring.",
        technologies: &["Python", "Apache Airflow", "Kubeflow", "MLflow", "Docker", "AWS"],
        features: &[
            "Automated model training",
            "Version control for models",
            "A/B testing framework",
            "Performance monitoring",
            "CI/CD integration",
        ],
        live_url: None,
        github_url: Some("https://github.com"),
        category: ProjectCategory::MachineLearning,
    },
    Project {
        id: 4,
        title: "Real-Time Collaboration Platform",
        description: "WebSocket-based collaborative workspace for teams",
        long_description: "A real-time collaboration platform that enables teams to work \
            together seamlessly. Features include live document editing, video conferencing, \
            and project management tools.",
        technologies: &["React", "Socket.io", "WebRTC", "Node.js", "Express", "MongoDB"],
        features: &[
            "Real-time document editing",
            "Video conferencing",
            "Screen sharing",
            "Project management",
            "Team analytics",
        ],
        live_url: Some("https://example.com"),
        github_url: Some("https://github.com"),
        category: ProjectCategory::RealTime,
    },
    Project {
        id: 5,
        title: "Blockchain Supply Chain",
        description: "Transparent supply chain management using blockchain technology",
        long_description: "Revolutionary supply chain management system built on blockchain \
            technology. Provides complete transparency and traceability for products from \
            manufacturer to consumer.",
        technologies: &["Solidity", "Web3.js", "React", "Node.js", "IPFS", "Ethereum"],
        features: &[
            "Blockchain-based tracking",
            "Smart contracts",
            "Immutable records",
            "Supplier verification",
            "Consumer transparency",
        ],
        live_url: None,
        github_url: Some("https://github.com"),
        category: ProjectCategory::Blockchain,
    },
    Project {
        id: 6,
        title: "IoT Smart Home System",
        description: "Comprehensive smart home automation and monitoring system",
        long_description: "Complete IoT ecosystem for smart home management. Integrates various \
            sensors and devices to provide automated control, energy monitoring, and security \
            features.",
        technologies: &["Python", "MQTT", "Raspberry Pi", "React", "Node-RED", "InfluxDB"],
        features: &[
            "Device automation",
            "Energy monitoring",
            "Security alerts",
            "Voice control integration",
            "Mobile app control",
        ],
        live_url: None,
        github_url: Some("https://github.com"),
        category: ProjectCategory::Iot,
    },
];

pub fn find_project(projects: &[Project], id: u32) -> Result<&Project, ProjectError> {
    projects
        .iter()
        .find(|p| p.id == id)
        .ok_or(ProjectError::UnknownProject(id))
}

/// Which project, if any, the detail dialog shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    selected: Option<u32>,
}

impl ProjectSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the dialog on `id`, replacing any current selection.
    pub fn select(&mut self, projects: &[Project], id: u32) -> Result<(), ProjectError> {
        find_project(projects, id)?;
        self.selected = Some(id);
        Ok(())
    }

    /// Close the dialog. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Keyboard handling while the page has focus; only `Escape` closes.
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}
