use super::Error;
use serde::de::DeserializeOwned;

pub trait ResponseHandler {
    /// Reads the body of a finished request, turning transport failures and
    /// non-2xx statuses into [`Error`].
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::Request { cause })?;
        let status = response.status().as_u16();
        log::debug!("Response status {}", status);

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseText { cause })?;

        if !(200..300).contains(&status) {
            return Err(Error::Status {
                status,
                message: text,
            });
        }

        Ok(text)
    }
}

pub fn parse<T>(text: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|cause| Error::ParseResponse { cause })
}
