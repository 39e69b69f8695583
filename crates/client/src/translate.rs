use predicat_core::{EMPTY_SENTENCE_MESSAGE, TranslationRequest, TranslationResult};

use crate::{Error, PredicatClient, decode};

impl PredicatClient {
    /// Translate a French sentence into first-order logic.
    ///
    /// Blank sentences are rejected locally with the message the server
    /// would return. Sentences no rule recognizes come back as the fallback
    /// result, not as an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), predicat_client::Error> {
    /// use predicat_client::PredicatClient;
    ///
    /// let client = PredicatClient::new("http://localhost:8001")?;
    /// let result = client.translate("Socrate est philosophe").await?;
    /// assert_eq!(result.fol_translation, "philosophe(socrate)");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn translate(&self, sentence: &str) -> Result<TranslationResult, Error> {
        let request = TranslationRequest::new(sentence);
        if request.is_blank() {
            return Err(Error::InvalidInput(EMPTY_SENTENCE_MESSAGE.to_owned()));
        }

        let response = self
            .client
            .post(self.url("/api/translate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_sentence_rejected_without_request() {
        // Nothing listens on this port; a request would fail with Connection.
        let client = PredicatClient::new("http://127.0.0.1:9").unwrap();
        for sentence in ["", "  ", "\n\t"] {
            let err = client.translate(sentence).await.unwrap_err();
            assert!(
                matches!(err, Error::InvalidInput(ref m) if m == EMPTY_SENTENCE_MESSAGE),
                "unexpected error: {err:?}"
            );
        }
    }
}
