//! Fixed lookup tables driving the rule-based analyzer.
//!
//! Every table is plain data: an ordered slice of `(key, value)` pairs with a
//! declared default. Iteration order is significant wherever a table is scanned
//! (field scoring ties, industry ranking), so the slices are never re-sorted.

use crate::processing::skills::SkillMatcher;
use once_cell::sync::Lazy;

pub type Keywords = &'static [&'static str];

/// Ordered key/value table with a default for unknown keys.
#[derive(Debug)]
pub struct LookupTable<V: 'static> {
    entries: &'static [(&'static str, V)],
    default: V,
}

impl<V: Copy + 'static> LookupTable<V> {
    pub const fn new(entries: &'static [(&'static str, V)], default: V) -> Self {
        Self { entries, default }
    }

    /// Exact-key lookup, falling back to the declared default.
    pub fn lookup(&self, key: &str) -> V {
        self.get(key).unwrap_or(self.default)
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn default_value(&self) -> V {
        self.default
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, V)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fallback field when no keyword scores.
pub const DEFAULT_FIELD: &str = "General Business";

/// Baseline plotted next to the candidate on the radar chart.
pub const INDUSTRY_STANDARD_SCORES: [f64; 5] = [80.0, 75.0, 70.0, 75.0, 65.0];

/// Placeholder substituted with the skill name in fallback strings.
pub const SKILL_PLACEHOLDER: &str = "{skill}";

pub const SKILL_VOCABULARY: Keywords = &[
    // Tech
    "Python", "JavaScript", "Java", "C++", "R", "SQL", "TypeScript",
    "React", "Angular", "Vue", "Node.js", "Django", "Flask", "FastAPI",
    "Machine Learning", "Deep Learning", "NLP", "Computer Vision",
    "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy",
    "Docker", "Kubernetes", "AWS", "Azure", "GCP",
    "Git", "CI/CD", "REST API", "GraphQL", "MongoDB", "PostgreSQL",
    // Business & management
    "Project Management", "Agile", "Scrum", "Leadership", "Team Management",
    "Strategic Planning", "Budget Management", "Stakeholder Management",
    "Change Management", "Risk Management", "Process Improvement",
    // Marketing & sales
    "Digital Marketing", "SEO", "SEM", "Content Marketing", "Social Media Marketing",
    "Email Marketing", "Marketing Analytics", "CRM", "Salesforce", "HubSpot",
    "Sales Strategy", "Business Development", "Lead Generation", "Negotiation",
    // Finance & accounting
    "Financial Analysis", "Financial Modeling", "Budgeting", "Forecasting",
    "Accounting", "Auditing", "Tax Planning", "Excel", "QuickBooks", "SAP",
    "Investment Analysis", "Portfolio Management", "Risk Assessment",
    // Healthcare
    "Patient Care", "Clinical Research", "Healthcare Administration",
    "Medical Coding", "HIPAA", "Electronic Health Records", "Nursing",
    // HR & operations
    "Recruitment", "Talent Acquisition", "Employee Relations", "HR Policies",
    "Supply Chain Management", "Logistics", "Inventory Management",
    "Quality Assurance", "Lean Six Sigma", "Operations Management",
    // Soft skills
    "Communication", "Problem Solving", "Critical Thinking", "Collaboration",
    "Time Management", "Adaptability", "Creativity", "Emotional Intelligence",
];

/// Narrower vocabulary used when reading job postings.
pub const JOB_SKILL_VOCABULARY: Keywords = &[
    "Python", "JavaScript", "Java", "C++", "R", "SQL", "TypeScript",
    "React", "Angular", "Vue", "Node.js", "Django", "Flask", "FastAPI",
    "Machine Learning", "Deep Learning", "NLP", "Computer Vision",
    "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy",
    "Docker", "Kubernetes", "AWS", "Azure", "GCP",
    "Git", "CI/CD", "REST API", "GraphQL", "MongoDB", "PostgreSQL",
    "Project Management", "Agile", "Scrum", "Leadership", "Team Management",
    "Strategic Planning", "Budget Management", "Stakeholder Management",
    "Digital Marketing", "SEO", "SEM", "Content Marketing", "Social Media Marketing",
    "Salesforce", "HubSpot", "CRM", "Sales Strategy", "Business Development",
    "Financial Analysis", "Financial Modeling", "Budgeting", "Excel",
    "Communication", "Problem Solving", "Critical Thinking", "Collaboration",
];

pub const MAX_RESUME_SKILLS: usize = 20;
pub const MAX_JOB_SKILLS: usize = 15;

pub static FIELD_KEYWORDS: LookupTable<Keywords> = LookupTable::<Keywords>::new(
    &[
        ("Software Development", &["software", "developer", "programming", "coding", "engineer"]),
        ("Data Science", &["data scientist", "machine learning", "analytics", "data analysis"]),
        ("Digital Marketing", &["marketing", "seo", "social media", "content marketing", "campaigns"]),
        ("Sales", &["sales", "business development", "account management", "revenue"]),
        ("Finance", &["financial", "accounting", "investment", "banking", "audit"]),
        ("Healthcare", &["healthcare", "medical", "patient", "clinical", "nursing", "hospital"]),
        ("Human Resources", &["hr", "recruitment", "talent acquisition", "employee relations"]),
        ("Operations", &["operations", "supply chain", "logistics", "process improvement"]),
        ("Project Management", &["project manager", "scrum master", "agile", "program management"]),
        ("Design", &["designer", "ux", "ui", "graphic design", "creative"]),
        ("Education", &["teacher", "instructor", "education", "training", "curriculum"]),
    ],
    &[],
);

pub static ROLE_SUGGESTIONS: LookupTable<Keywords> = LookupTable::<Keywords>::new(
    &[
        ("Software Development", &["Senior Software Engineer", "Tech Lead", "Engineering Manager", "Solutions Architect", "DevOps Engineer"]),
        ("Data Science", &["Senior Data Scientist", "ML Engineer", "Data Engineering Manager", "AI Research Scientist", "Analytics Director"]),
        ("Digital Marketing", &["Marketing Manager", "Digital Marketing Director", "Growth Marketing Lead", "Brand Manager", "Content Strategy Director"]),
        ("Sales", &["Sales Manager", "Business Development Director", "Account Executive", "VP of Sales", "Revenue Operations Manager"]),
        ("Finance", &["Financial Analyst", "Finance Manager", "Investment Analyst", "Controller", "CFO"]),
        ("Healthcare", &["Healthcare Administrator", "Clinical Manager", "Medical Director", "Healthcare Consultant", "Patient Care Coordinator"]),
        ("Human Resources", &["HR Manager", "Talent Acquisition Lead", "People Operations Director", "HR Business Partner", "Chief People Officer"]),
        ("Operations", &["Operations Manager", "Supply Chain Director", "Process Improvement Manager", "COO", "Logistics Manager"]),
        ("Project Management", &["Senior Project Manager", "Program Manager", "Portfolio Manager", "PMO Director", "Agile Coach"]),
        ("Design", &["Senior Designer", "Design Manager", "Creative Director", "UX Director", "Product Designer"]),
        ("Education", &["Lead Instructor", "Curriculum Director", "Education Program Manager", "Dean", "Training Manager"]),
        ("General Business", &["Business Analyst", "Operations Manager", "Project Manager", "Strategy Consultant", "Product Manager"]),
    ],
    &["Business Analyst", "Operations Manager", "Project Manager", "Strategy Consultant", "Product Manager"],
);

/// Base requirement sets keyed by a role-name marker. The first rule whose
/// markers occur in the role name wins; the default covers everything else.
pub static ROLE_TYPE_SKILLS: LookupTable<Keywords> = LookupTable::<Keywords>::new(
    &[
        ("Manager|Director|Lead", &["Leadership", "Team Management", "Strategic Planning", "Communication", "Budget Management"]),
        ("Senior", &["Problem Solving", "Mentorship", "Technical Expertise", "Project Management"]),
        ("Engineer|Developer", &["Python", "Git", "Problem Solving", "Agile", "CI/CD"]),
        ("Analyst", &["Excel", "Data Analysis", "SQL", "Critical Thinking", "Communication"]),
        ("Designer", &["Creativity", "User Research", "Prototyping", "Collaboration", "Design Tools"]),
    ],
    &["Communication", "Problem Solving", "Collaboration", "Time Management"],
);

pub static FIELD_SKILLS: LookupTable<Keywords> = LookupTable::<Keywords>::new(
    &[
        ("Software Development", &["Python", "JavaScript", "Git", "Docker", "AWS"]),
        ("Data Science", &["Python", "Machine Learning", "SQL", "Statistics", "Data Visualization"]),
        ("Digital Marketing", &["SEO", "Google Analytics", "Content Marketing", "Social Media Marketing", "CRM"]),
        ("Sales", &["Salesforce", "Negotiation", "CRM", "Sales Strategy", "Lead Generation"]),
        ("Finance", &["Excel", "Financial Modeling", "Accounting", "Financial Analysis", "SAP"]),
        ("Healthcare", &["Patient Care", "Healthcare Administration", "HIPAA", "Electronic Health Records"]),
        ("Human Resources", &["Recruitment", "HR Policies", "Employee Relations", "Talent Management"]),
        ("Operations", &["Supply Chain Management", "Process Improvement", "Lean Six Sigma", "Logistics"]),
        ("Project Management", &["Agile", "Scrum", "Project Management", "Stakeholder Management"]),
    ],
    &["Communication", "Leadership", "Problem Solving"],
);

pub const MAX_ROLE_REQUIREMENTS: usize = 10;

pub static FIELD_CATEGORIES: LookupTable<Keywords> = LookupTable::<Keywords>::new(
    &[
        ("Software Development", &["Technical Skills", "Development Tools", "Architecture", "DevOps", "Collaboration"]),
        ("Data Science", &["Programming", "ML/AI", "Statistics", "Data Tools", "Visualization"]),
        ("Digital Marketing", &["Strategy", "Analytics", "Content", "Social Media", "Tools"]),
        ("Sales", &["Sales Skills", "CRM", "Communication", "Strategy", "Negotiation"]),
        ("Finance", &["Analysis", "Modeling", "Accounting", "Tools", "Compliance"]),
        ("Healthcare", &["Clinical Skills", "Administration", "Compliance", "Technology", "Patient Care"]),
        ("Human Resources", &["Recruitment", "Employee Relations", "Compliance", "Tools", "Strategy"]),
        ("Operations", &["Process Management", "Supply Chain", "Quality", "Tools", "Leadership"]),
        ("Project Management", &["Planning", "Execution", "Stakeholder Mgmt", "Tools", "Leadership"]),
    ],
    &["Core Skills", "Tools", "Communication", "Leadership", "Strategy"],
);

pub static INDUSTRY_KEYWORDS: LookupTable<Keywords> = LookupTable::<Keywords>::new(
    &[
        ("HealthTech", &["healthcare", "medical", "patient", "clinical", "health"]),
        ("FinTech", &["finance", "banking", "investment", "payment", "blockchain"]),
        ("Green Energy", &["sustainability", "renewable", "energy", "environmental", "climate"]),
        ("E-commerce", &["ecommerce", "retail", "sales", "marketing", "logistics"]),
        ("AI & Machine Learning", &["machine learning", "ai", "deep learning", "nlp", "computer vision"]),
        ("Cybersecurity", &["security", "cybersecurity", "encryption", "compliance", "risk"]),
        ("Cloud Computing", &["aws", "azure", "gcp", "cloud", "devops"]),
        ("EdTech", &["education", "training", "learning", "curriculum", "teaching"]),
        ("SaaS", &["software", "saas", "api", "cloud", "subscription"]),
        ("Digital Marketing", &["marketing", "seo", "social media", "content", "analytics"]),
    ],
    &[],
);

pub const MAX_TRENDING_INDUSTRIES: usize = 5;

pub static FIELD_DEFAULT_SKILLS: LookupTable<Keywords> = LookupTable::<Keywords>::new(
    &[
        ("Software Development", &["Docker", "Kubernetes", "CI/CD", "TypeScript"]),
        ("Data Science", &["Deep Learning", "MLOps", "Big Data", "Cloud Platforms"]),
        ("Digital Marketing", &["Marketing Automation", "A/B Testing", "Google Ads", "Analytics"]),
        ("Sales", &["Sales Automation", "CRM Advanced", "Data Analysis", "Presentation Skills"]),
        ("Finance", &["Advanced Excel", "Power BI", "Financial Software", "Data Analysis"]),
        ("Healthcare", &["Healthcare IT", "Data Analytics", "Compliance Training", "EMR Systems"]),
        ("Human Resources", &["HR Analytics", "Applicant Tracking Systems", "Employee Engagement", "Compliance"]),
        ("Operations", &["Six Sigma", "ERP Systems", "Data Analytics", "Automation"]),
        ("Project Management", &["PMP Certification", "Advanced Agile", "Portfolio Management", "Risk Management"]),
    ],
    &["Leadership", "Communication", "Project Management"],
);

pub static LEARNING_RESOURCES: LookupTable<&'static str> = LookupTable::<&'static str>::new(
    &[
        ("Python", "Python.org Official Tutorial"),
        ("JavaScript", "MDN Web Docs - JavaScript Guide"),
        ("React", "React Official Documentation"),
        ("Machine Learning", "Coursera - Machine Learning Specialization"),
        ("Deep Learning", "Deep Learning Specialization by Andrew Ng"),
        ("Docker", "Docker Official Documentation"),
        ("Kubernetes", "Kubernetes.io Interactive Tutorial"),
        ("AWS", "AWS Certified Solutions Architect Course"),
        ("SQL", "SQLBolt - Interactive SQL Tutorial"),
        ("TensorFlow", "TensorFlow Official Tutorials"),
        ("PyTorch", "PyTorch Tutorials"),
        ("Node.js", "Node.js Official Guides"),
        ("TypeScript", "TypeScript Handbook"),
        ("Statistics", "Khan Academy - Statistics & Probability"),
        ("Data Visualization", "D3.js in Action"),
        ("CI/CD", "GitHub Actions Documentation"),
        ("Git", "Pro Git Book (Free)"),
    ],
    "{skill} - Udemy/Coursera Course",
);

pub static LEARNING_TIMEFRAMES: LookupTable<&'static str> = LookupTable::<&'static str>::new(
    &[
        ("Python", "2-3 months"),
        ("JavaScript", "2-3 months"),
        ("React", "1-2 months"),
        ("Machine Learning", "3-4 months"),
        ("Deep Learning", "4-6 months"),
        ("Docker", "2-4 weeks"),
        ("Kubernetes", "1-2 months"),
        ("AWS", "2-3 months"),
        ("SQL", "1-2 months"),
        ("TensorFlow", "2-3 months"),
        ("PyTorch", "2-3 months"),
        ("Statistics", "2-3 months"),
        ("Git", "2-3 weeks"),
    ],
    "1-3 months",
);

pub static LEARNING_TIPS: LookupTable<&'static str> = LookupTable::<&'static str>::new(
    &[
        ("Python", "Start with basic syntax and data structures, then build small projects to solidify your understanding."),
        ("JavaScript", "Master the fundamentals before diving into frameworks - focus on ES6+ features and async programming."),
        ("React", "Build component-based thinking by creating reusable UI components and understanding the virtual DOM."),
        ("Machine Learning", "Begin with supervised learning algorithms and practice on real datasets from Kaggle."),
        ("Deep Learning", "Start with neural network basics and implement models from scratch before using high-level frameworks."),
        ("Docker", "Learn by containerizing your existing projects - start simple with single-container apps."),
        ("Kubernetes", "Master Docker first, then deploy a simple app to understand pods, services, and deployments."),
        ("AWS", "Get hands-on with the free tier - start with EC2, S3, and Lambda to understand core services."),
        ("SQL", "Practice writing queries daily on platforms like LeetCode or HackerRank to build muscle memory."),
        ("TensorFlow", "Follow official tutorials and implement classic models like CNNs and RNNs from scratch."),
        ("PyTorch", "Start with tensor operations and autograd, then build neural networks using nn.Module."),
        ("Node.js", "Build REST APIs and understand the event loop - async/await patterns are crucial."),
        ("TypeScript", "Learn type annotations gradually by converting existing JavaScript projects to TypeScript."),
        ("Statistics", "Focus on probability distributions and hypothesis testing - apply concepts to real-world data."),
        ("Data Visualization", "Start with basic charts in libraries like Matplotlib or Chart.js before advanced visualizations."),
        ("CI/CD", "Set up automated testing and deployment for a personal project using GitHub Actions or Jenkins."),
        ("Git", "Practice branching strategies and learn to resolve merge conflicts through hands-on experience."),
        ("Angular", "Understand TypeScript first, then master components, services, and dependency injection."),
        ("Vue", "Start with the composition API and build reactive components with clear data flow."),
        ("Django", "Learn the MVT pattern and build a full CRUD application with authentication."),
        ("Flask", "Master routing and templates, then add database integration with SQLAlchemy."),
        ("FastAPI", "Leverage type hints and automatic documentation - build async APIs for better performance."),
        ("MongoDB", "Understand document-based data modeling and practice with aggregation pipelines."),
        ("PostgreSQL", "Learn advanced features like JSON support, full-text search, and query optimization."),
        ("GraphQL", "Start with schema design and resolvers - understand the difference from REST APIs."),
        ("Redis", "Use it for caching and session storage in a real project to understand its speed benefits."),
        ("Pandas", "Practice data manipulation with real datasets - master groupby, merge, and pivot operations."),
        ("NumPy", "Focus on array operations and broadcasting - essential for data science and ML work."),
        ("Scikit-learn", "Implement end-to-end ML pipelines including preprocessing, training, and evaluation."),
        ("NLP", "Start with text preprocessing and basic techniques like TF-IDF before deep learning models."),
        ("Computer Vision", "Learn image processing basics with OpenCV before diving into CNNs and object detection."),
        ("Azure", "Explore Azure Portal and CLI - start with VMs, Storage, and Azure Functions."),
        ("GCP", "Use the free tier to experiment with Compute Engine, Cloud Storage, and BigQuery."),
    ],
    "Practice {skill} through hands-on projects and online tutorials to build real-world experience.",
);

/// Substitute the skill name into a table value or fallback template.
pub fn fill_skill(template: &str, skill: &str) -> String {
    template.replace(SKILL_PLACEHOLDER, skill)
}

/// The full set of tables one analyzer instance reads from.
///
/// `AnalyzerTables::standard()` is what production uses; tests can assemble
/// an instance from their own `static` tables.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerTables {
    pub resume_skills: &'static SkillMatcher,
    pub job_skills: &'static SkillMatcher,
    pub field_keywords: &'static LookupTable<Keywords>,
    pub role_suggestions: &'static LookupTable<Keywords>,
    pub role_type_skills: &'static LookupTable<Keywords>,
    pub field_skills: &'static LookupTable<Keywords>,
    pub field_categories: &'static LookupTable<Keywords>,
    pub industry_keywords: &'static LookupTable<Keywords>,
    pub field_default_skills: &'static LookupTable<Keywords>,
    pub resources: &'static LookupTable<&'static str>,
    pub timeframes: &'static LookupTable<&'static str>,
    pub tips: &'static LookupTable<&'static str>,
}

static RESUME_SKILL_MATCHER: Lazy<SkillMatcher> = Lazy::new(|| {
    SkillMatcher::new(SKILL_VOCABULARY, MAX_RESUME_SKILLS)
        .expect("resume skill vocabulary must build a matcher")
});

static JOB_SKILL_MATCHER: Lazy<SkillMatcher> = Lazy::new(|| {
    SkillMatcher::new(JOB_SKILL_VOCABULARY, MAX_JOB_SKILLS)
        .expect("job skill vocabulary must build a matcher")
});

impl AnalyzerTables {
    pub fn standard() -> Self {
        Self {
            resume_skills: &RESUME_SKILL_MATCHER,
            job_skills: &JOB_SKILL_MATCHER,
            field_keywords: &FIELD_KEYWORDS,
            role_suggestions: &ROLE_SUGGESTIONS,
            role_type_skills: &ROLE_TYPE_SKILLS,
            field_skills: &FIELD_SKILLS,
            field_categories: &FIELD_CATEGORIES,
            industry_keywords: &INDUSTRY_KEYWORDS,
            field_default_skills: &FIELD_DEFAULT_SKILLS,
            resources: &LEARNING_RESOURCES,
            timeframes: &LEARNING_TIMEFRAMES,
            tips: &LEARNING_TIPS,
        }
    }
}

impl Default for AnalyzerTables {
    fn default() -> Self {
        Self::standard()
    }
}
