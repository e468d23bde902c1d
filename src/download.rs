use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DownloadError {
    #[error("file not found")]
    NotFound,
    #[error("server responded with {0}")]
    Unavailable(u16),
    #[error("network error: {0}")]
    Network(String),
}

impl DownloadError {
    /// Maps a response status; `None` means the file can be downloaded.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(Self::NotFound),
            other => Some(Self::Unavailable(other)),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound | Self::Unavailable(_) => {
                "CV file is currently unavailable. Please try again later."
            }
            Self::Network(_) => "Error downloading CV. Please try again later.",
        }
    }
}

/// Checks that the CV exists, then hands it to the browser as a download.
#[cfg(feature = "hydrate")]
pub async fn download_cv(cv: &crate::config::CvConfig) -> Result<(), DownloadError> {
    use gloo_net::http::Request;

    let response = Request::get(&cv.path)
        .send()
        .await
        .map_err(|e| DownloadError::Network(e.to_string()))?;
    if let Some(e) = DownloadError::from_status(response.status()) {
        return Err(e);
    }
    crate::web::trigger_download(&cv.path, &cv.file_name)
        .map_err(|e| DownloadError::Network(format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(DownloadError::from_status(200), None);
        assert_eq!(DownloadError::from_status(204), None);
        assert_eq!(DownloadError::from_status(404), Some(DownloadError::NotFound));
        assert_eq!(
            DownloadError::from_status(503),
            Some(DownloadError::Unavailable(503))
        );
    }

    #[test]
    fn test_missing_file_is_distinct_from_network_failure() {
        let missing = DownloadError::NotFound;
        let offline = DownloadError::Network("offline".to_string());
        assert_ne!(missing, offline);
        assert_ne!(missing.user_message(), offline.user_message());
    }
}
