use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_REPLY_FILE_NAME: &str = "gst_notice_reply.txt";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upload: UploadConfig,
    pub reply: ReplyConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Upper bound on a whole form submission, all files included.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyConfig {
    pub download_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 3000,
                host: "0.0.0.0".to_string(),
                cors_allowed_origins: vec!["http://localhost:3000".to_string()],
            },
            upload: UploadConfig {
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            reply: ReplyConfig {
                download_file_name: DEFAULT_REPLY_FILE_NAME.to_string(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. `from_env` feeds
    /// it the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            server: ServerConfig {
                port: match lookup("PORT") {
                    Some(v) => v.parse().with_context(|| format!("Invalid PORT: {}", v))?,
                    None => defaults.server.port,
                },
                host: lookup("HOST").unwrap_or(defaults.server.host),
                cors_allowed_origins: lookup("ALLOWED_ORIGINS")
                    .map(|v| {
                        v.split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or(defaults.server.cors_allowed_origins),
            },
            upload: UploadConfig {
                max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                    Some(v) => v
                        .parse()
                        .with_context(|| format!("Invalid MAX_UPLOAD_BYTES: {}", v))?,
                    None => defaults.upload.max_upload_bytes,
                },
            },
            reply: ReplyConfig {
                download_file_name: lookup("REPLY_FILE_NAME")
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or(defaults.reply.download_file_name),
            },
        })
    }
}
