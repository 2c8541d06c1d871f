use std::collections::BTreeSet;

use crate::config::DetailLevel;
use crate::models::RepositoryProfile;

const ARCHITECTURE_SYSTEM_PROMPT: &str = r#"You are an expert software architect creating architecture documentation.

Create detailed architecture documentation that includes:
1. System overview and high-level design
2. Component architecture and relationships
3. Data flow and processing
4. Technology stack and dependencies
5. Deployment architecture (if applicable)
6. Security considerations (if applicable)

Use clear diagrams in text format (ASCII art) and provide comprehensive technical details."#;

const API_SYSTEM_PROMPT: &str = r#"You are an expert API documentation writer.

Create comprehensive API documentation that includes:
1. API overview and purpose
2. Authentication methods (if applicable)
3. Endpoint documentation with parameters
4. Request/response examples
5. Error handling
6. Rate limiting (if applicable)
7. SDK examples (if applicable)

Use clear examples and provide practical usage scenarios."#;

const SETUP_SYSTEM_PROMPT: &str = r#"You are an expert DevOps engineer creating setup documentation.

Create comprehensive setup documentation that includes:
1. Prerequisites and system requirements
2. Installation steps
3. Configuration setup
4. Environment variables
5. Database setup (if applicable)
6. Testing the installation
7. Troubleshooting common issues

Provide step-by-step instructions that are easy to follow."#;

const USAGE_SYSTEM_PROMPT: &str = r#"You are an expert software developer creating usage documentation.

Create comprehensive usage documentation that includes:
1. Getting started guide
2. Basic usage examples
3. Advanced features and configurations
4. Best practices and patterns
5. Common use cases
6. Performance optimization tips
7. Integration examples

Provide practical examples and real-world scenarios."#;

/// The documents the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Readme,
    Architecture,
    Api,
    Setup,
    Usage,
}

impl DocKind {
    /// Output location relative to the repository root.
    pub fn output_path(&self) -> &'static str {
        match self {
            DocKind::Readme => "README.md",
            DocKind::Architecture => "docs/architecture.md",
            DocKind::Api => "docs/api.md",
            DocKind::Setup => "docs/setup.md",
            DocKind::Usage => "docs/usage.md",
        }
    }
}

/// One prompt-ready documentation request: a document kind plus the scanned
/// profile it should describe.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub kind: DocKind,
    pub profile: RepositoryProfile,
    pub detail_level: DetailLevel,
}

impl GenerationRequest {
    pub fn new(kind: DocKind, profile: &RepositoryProfile, detail_level: DetailLevel) -> Self {
        Self {
            kind,
            profile: profile.clone(),
            detail_level,
        }
    }

    pub fn system_prompt(&self) -> String {
        match self.kind {
            DocKind::Readme => format!(
                r#"You are an expert technical writer creating README.md files for software projects.

Detail Level: {}
Instructions: {}

Create a well-structured README.md that includes:
1. Project title and description
2. Features and capabilities
3. Installation and setup instructions
4. Usage examples
5. Project structure overview
6. Contributing guidelines (if applicable)
7. License information (if available)

Use proper Markdown formatting and make it professional and informative."#,
                self.detail_level,
                detail_instructions(self.detail_level)
            ),
            DocKind::Architecture => ARCHITECTURE_SYSTEM_PROMPT.to_string(),
            DocKind::Api => API_SYSTEM_PROMPT.to_string(),
            DocKind::Setup => SETUP_SYSTEM_PROMPT.to_string(),
            DocKind::Usage => USAGE_SYSTEM_PROMPT.to_string(),
        }
    }

    /// Build the user prompt: each document kind embeds the profile fields
    /// it documents.
    pub fn to_prompt(&self) -> String {
        let profile = &self.profile;
        match self.kind {
            DocKind::Readme => format!(
                "Repository Analysis:\n\
                 - Project Type: {}\n\
                 - Languages: {}\n\
                 - File Types: {}\n\
                 - Main Files: {}\n\
                 - Config Files: {}\n\
                 - Dependencies: {}\n\n\
                 Repository Structure:\n{}\n\n\
                 Detail Level: {}\n\n\
                 Please generate a comprehensive README.md file for this repository.",
                profile.project_type,
                join_set(&profile.languages),
                join_set(&profile.file_types),
                profile.main_files.join(", "),
                profile.config_files.join(", "),
                profile.dependencies.join(", "),
                profile.structure.join("\n"),
                self.detail_level,
            ),
            DocKind::Architecture => format!(
                "Repository Analysis for Architecture Documentation:\n\
                 - Project Type: {}\n\
                 - Languages: {}\n\
                 - Main Files: {}\n\
                 - File Structure: {}\n\n\
                 Detail Level: {}\n\n\
                 Generate comprehensive architecture documentation including system design, \
                 component relationships, and data flow.",
                profile.project_type,
                join_set(&profile.languages),
                profile.main_files.join(", "),
                profile.structure.join("\n"),
                self.detail_level,
            ),
            DocKind::Api => format!(
                "Repository Analysis for API Documentation:\n\
                 - Project Type: {}\n\
                 - Languages: {}\n\
                 - Main Files: {}\n\n\
                 Detail Level: {}\n\n\
                 Generate comprehensive API documentation including endpoints, parameters, \
                 and usage examples.",
                profile.project_type,
                join_set(&profile.languages),
                profile.main_files.join(", "),
                self.detail_level,
            ),
            DocKind::Setup => format!(
                "Repository Analysis for Setup Documentation:\n\
                 - Project Type: {}\n\
                 - Dependencies: {}\n\
                 - Config Files: {}\n\n\
                 Detail Level: {}\n\n\
                 Generate detailed setup and installation documentation.",
                profile.project_type,
                profile.dependencies.join(", "),
                profile.config_files.join(", "),
                self.detail_level,
            ),
            DocKind::Usage => format!(
                "Repository Analysis for Usage Documentation:\n\
                 - Project Type: {}\n\
                 - Main Files: {}\n\
                 - Languages: {}\n\n\
                 Detail Level: {}\n\n\
                 Generate comprehensive usage documentation with examples and best practices.",
                profile.project_type,
                profile.main_files.join(", "),
                join_set(&profile.languages),
                self.detail_level,
            ),
        }
    }
}

fn detail_instructions(level: DetailLevel) -> &'static str {
    match level {
        DetailLevel::Low => "Provide a basic overview with minimal technical details.",
        DetailLevel::Medium => "Include setup instructions, basic usage, and key features.",
        DetailLevel::High => {
            "Include detailed setup instructions, code examples, architecture overview, \
             and comprehensive feature documentation."
        }
    }
}

fn join_set(items: &BTreeSet<String>) -> String {
    items.iter().cloned().collect::<Vec<_>>().join(", ")
}
