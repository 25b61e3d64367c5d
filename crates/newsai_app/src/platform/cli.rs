use std::path::PathBuf;

use clap::Parser;
use newsai_core::InputMode;

/// Sentiment and summary client for the NewsAI analysis service.
#[derive(Debug, Default, Parser)]
#[command(name = "newsai", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (RON). Defaults to ./newsai.ron when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the analysis service, e.g. http://localhost:5000
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Analyze this article URL once and print the result.
    #[arg(long, value_name = "URL", conflicts_with = "text")]
    pub url: Option<String>,

    /// Analyze this article text once and print the result.
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,
}

impl Cli {
    pub fn one_shot(&self) -> Option<(InputMode, String)> {
        match (&self.url, &self.text) {
            (Some(url), _) => Some((InputMode::Url, url.clone())),
            (None, Some(text)) => Some((InputMode::Text, text.clone())),
            (None, None) => None,
        }
    }
}
