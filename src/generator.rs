use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::llm::{DocKind, GenerationRequest, LlmProvider};
use crate::models::{GenerationReport, RepositoryProfile};

/// Documentation sections generated under docs/, in generation order.
const DOC_SECTIONS: [DocKind; 4] = [
    DocKind::Architecture,
    DocKind::Api,
    DocKind::Setup,
    DocKind::Usage,
];

/// Turns a scanned [`RepositoryProfile`] into README and documentation files
/// by dispatching prompts through an [`LlmProvider`] under a call budget.
pub struct DocumentationGenerator {
    llm: Arc<dyn LlmProvider>,
    config: GeneratorConfig,
    calls_made: u32,
}

impl DocumentationGenerator {
    pub fn new(llm: impl LlmProvider + 'static, config: GeneratorConfig) -> Self {
        Self {
            llm: Arc::new(llm),
            config,
            calls_made: 0,
        }
    }

    pub fn llm_calls_made(&self) -> u32 {
        self.calls_made
    }

    /// Generate README.md (unless the repository already has one) and the
    /// docs/ set for a scanned repository.
    pub async fn run(
        &mut self,
        repo_root: &Path,
        profile: &RepositoryProfile,
    ) -> Result<GenerationReport> {
        tracing::info!(
            "Starting documentation generation for: {} (detail: {}, budget: {} calls)",
            repo_root.display(),
            self.config.detail_level,
            self.config.max_llm_calls
        );

        let mut written = Vec::new();

        if repo_root.join(DocKind::Readme.output_path()).exists() {
            tracing::info!("README.md already exists, skipping generation");
        } else if let Some(path) = self
            .generate_document(repo_root, DocKind::Readme, profile)
            .await?
        {
            written.push(path);
        }

        written.extend(self.generate_docs(repo_root, profile).await?);

        tracing::info!(
            "Documentation generation complete, {} LLM calls made",
            self.calls_made
        );

        Ok(GenerationReport {
            documents_written: written,
            llm_calls_made: self.calls_made,
            generated_at: Utc::now(),
        })
    }

    /// Generate the docs/ sections, each budget-checked individually.
    async fn generate_docs(
        &mut self,
        repo_root: &Path,
        profile: &RepositoryProfile,
    ) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(repo_root.join("docs"))?;

        let pb = ProgressBar::new(DOC_SECTIONS.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut written = Vec::new();
        for kind in DOC_SECTIONS {
            if let Some(path) = self.generate_document(repo_root, kind, profile).await? {
                written.push(path);
            }
            pb.inc(1);
        }

        pb.finish_with_message("Documentation files generated");
        Ok(written)
    }

    /// Generate one document and write it, or skip with a warning when the
    /// call budget is already spent.
    async fn generate_document(
        &mut self,
        repo_root: &Path,
        kind: DocKind,
        profile: &RepositoryProfile,
    ) -> Result<Option<PathBuf>> {
        if self.calls_made >= self.config.max_llm_calls {
            tracing::warn!("Maximum LLM calls reached, skipping {}", kind.output_path());
            return Ok(None);
        }

        let request = GenerationRequest::new(kind, profile, self.config.detail_level);
        let content = self.call_llm(&request).await?;

        let path = repo_root.join(kind.output_path());
        std::fs::write(&path, content)?;
        tracing::info!("{} written", path.display());

        Ok(Some(path))
    }

    async fn call_llm(&mut self, request: &GenerationRequest) -> Result<String> {
        if self.calls_made >= self.config.max_llm_calls {
            return Err(Error::CallBudgetExhausted(self.config.max_llm_calls));
        }

        let content = self.llm.generate(request).await?;
        self.calls_made += 1;
        tracing::info!(
            "LLM call {}/{} completed via {}",
            self.calls_made,
            self.config.max_llm_calls,
            self.llm.name()
        );

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetailLevel;
    use async_trait::async_trait;
    use std::fs;
    use tempfile::TempDir;

    struct FixedProvider;

    #[async_trait]
    impl LlmProvider for FixedProvider {
        async fn generate(&self, request: &GenerationRequest) -> Result<String> {
            Ok(format!("# Generated for {}\n", request.kind.output_path()))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn generate(&self, _request: &GenerationRequest) -> Result<String> {
            Err(Error::LlmApi("boom".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn config(max_llm_calls: u32) -> GeneratorConfig {
        GeneratorConfig {
            detail_level: DetailLevel::Medium,
            max_llm_calls,
        }
    }

    #[tokio::test]
    async fn test_generates_readme_and_all_docs() {
        let dir = TempDir::new().unwrap();
        let mut generator = DocumentationGenerator::new(FixedProvider, config(20));

        let report = generator
            .run(dir.path(), &RepositoryProfile::default())
            .await
            .unwrap();

        assert_eq!(report.llm_calls_made, 5);
        assert_eq!(report.documents_written.len(), 5);
        for name in [
            "README.md",
            "docs/architecture.md",
            "docs/api.md",
            "docs/setup.md",
            "docs/usage.md",
        ] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[tokio::test]
    async fn test_call_budget_skips_remaining_documents() {
        let dir = TempDir::new().unwrap();
        let mut generator = DocumentationGenerator::new(FixedProvider, config(2));

        let report = generator
            .run(dir.path(), &RepositoryProfile::default())
            .await
            .unwrap();

        assert_eq!(report.llm_calls_made, 2);
        assert!(dir.path().join("README.md").exists());
        assert!(dir.path().join("docs/architecture.md").exists());
        assert!(!dir.path().join("docs/api.md").exists());
        assert!(!dir.path().join("docs/setup.md").exists());
        assert!(!dir.path().join("docs/usage.md").exists());
    }

    #[tokio::test]
    async fn test_existing_readme_is_preserved() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# Handwritten").unwrap();
        let mut generator = DocumentationGenerator::new(FixedProvider, config(20));

        let report = generator
            .run(dir.path(), &RepositoryProfile::default())
            .await
            .unwrap();

        assert_eq!(report.llm_calls_made, 4);
        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(readme, "# Handwritten");
    }

    #[tokio::test]
    async fn test_provider_failure_is_propagated() {
        let dir = TempDir::new().unwrap();
        let mut generator = DocumentationGenerator::new(FailingProvider, config(20));

        let result = generator.run(dir.path(), &RepositoryProfile::default()).await;

        assert!(matches!(result, Err(Error::LlmApi(_))));
    }
}
