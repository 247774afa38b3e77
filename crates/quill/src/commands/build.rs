//! `quill build` command implementation.

use std::path::PathBuf;

use clap::Args;
use quill_config::{BuildConfig, CliSettings, Config};
use quill_site::{SiteBuilder, SiteLayout};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output (log each build phase).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the site build fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let build = &config.build_resolved;
        tracing::debug!(config_path = ?config.config_path, "Loaded configuration");

        output.info(&format!("Source: {}", build.source_dir.display()));
        output.info(&format!("Output: {}", build.output_dir.display()));

        let report = SiteBuilder::new(site_layout(build)).build()?;

        if report.blog_skipped {
            output.info("No blog posts found, skipping...");
        }
        if !report.script_copied {
            output.info("No main.js found, skipping...");
        }
        output.success(&format!(
            "Site built successfully! ({} pages, {} posts)",
            report.pages, report.posts
        ));
        Ok(())
    }
}

/// Map resolved configuration onto the site builder's layout.
fn site_layout(build: &BuildConfig) -> SiteLayout {
    SiteLayout {
        pages_dir: build.pages_dir(),
        blog_dir: build.blog_dir(),
        template: build.template_path(),
        stylesheet: build.stylesheet_path(),
        script: build.script_path(),
        output_dir: build.output_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_site_layout_from_config() {
        let build = BuildConfig {
            source_dir: PathBuf::from("/site/src"),
            output_dir: PathBuf::from("/site/public"),
            pages: PathBuf::from("pages"),
            blog: PathBuf::from("blog"),
            template: PathBuf::from("templates/base.html"),
            stylesheet: PathBuf::from("css/style.css"),
            script: PathBuf::from("js/main.js"),
        };

        let layout = site_layout(&build);

        assert_eq!(layout.pages_dir, PathBuf::from("/site/src/pages"));
        assert_eq!(layout.blog_dir, PathBuf::from("/site/src/blog"));
        assert_eq!(
            layout.template,
            PathBuf::from("/site/src/templates/base.html")
        );
        assert_eq!(layout.stylesheet, PathBuf::from("/site/src/css/style.css"));
        assert_eq!(layout.script, PathBuf::from("/site/src/js/main.js"));
        assert_eq!(layout.output_dir, PathBuf::from("/site/public"));
    }
}
