use std::path::{Path, PathBuf};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the server from a
/// `backend/` directory next to the media library.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Directory scanned by `GET /api/media`.
    pub media_root: PathBuf,
    /// Directory static files are served from.
    pub site_root: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `8080`                           |
    /// | `MEDIA_ROOT`           | parent of the working directory  |
    /// | `SITE_ROOT`            | `MEDIA_ROOT`                     |
    /// | `CORS_ORIGINS`         | `*`                              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    pub fn from_env() -> Self {
        let cwd = std::env::current_dir().expect("Working directory must be accessible");

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let media_root = match std::env::var("MEDIA_ROOT") {
            Ok(value) => absolutize(&cwd, &value),
            Err(_) => default_media_root(&cwd),
        };

        let site_root = std::env::var("SITE_ROOT")
            .map(|value| absolutize(&cwd, &value))
            .unwrap_or_else(|_| media_root.clone());

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            media_root,
            site_root,
            cors_origins,
            request_timeout_secs,
        }
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

/// The server is normally started from a subdirectory of the library.
fn default_media_root(cwd: &Path) -> PathBuf {
    cwd.parent().map(Path::to_path_buf).unwrap_or_else(|| cwd.to_path_buf())
}

fn absolutize(cwd: &Path, value: &str) -> PathBuf {
    let path = PathBuf::from(value);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
