//! Fixed skill-keyword vocabulary. Order is canonical: extraction output and
//! every "top N" truncation downstream follow it.

pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "nodejs",
    "django",
    "flask",
    "sql",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "ai",
    "data science",
    "agile",
    "scrum",
    "devops",
    "ci/cd",
    "html",
    "css",
    "angular",
    "vue",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "api",
    "rest",
    "microservices",
    "cloud computing",
    "blockchain",
    "cybersecurity",
];
