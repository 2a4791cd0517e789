use gloo::net::http::Request;
use whackamole_protocol::{ApiCall, CallError, Method, Reply};

/// HTTP access to the game server.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ApiClient {
    base: String,
}

impl ApiClient {
    /// `base` is prepended to every endpoint path, empty means same origin.
    pub(crate) fn new(base: &str) -> Self {
        Self {
            base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, call: &ApiCall) -> String {
        format!("{}{}", self.base, call.path())
    }

    pub(crate) async fn send(&self, call: ApiCall) -> Result<Reply, CallError> {
        let url = self.url(&call);
        log::trace!("-> {}", call);

        let response = match (call.method(), call.body()) {
            (Method::Get, _) => Request::get(&url).send().await,
            (Method::Post, None) => Request::post(&url).send().await,
            (Method::Post, Some(body)) => {
                Request::post(&url)
                    .header("Content-Type", "text/plain;charset=UTF-8")
                    .body(body)
                    .map_err(transport)?
                    .send()
                    .await
            }
        }
        .map_err(transport)?;

        if !response.ok() {
            return Err(CallError::Status(response.status()));
        }
        let text = response.text().await.map_err(transport)?;
        log::trace!("<- {}: {:?}", call, text);
        Ok(call.decode_reply(&text)?)
    }
}

fn transport(err: gloo::net::Error) -> CallError {
    CallError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use whackamole_protocol::Difficulty;

    #[test]
    fn same_origin_by_default() {
        let api = ApiClient::new("");
        assert_eq!(api.url(&ApiCall::FetchState), "/game_state");
    }

    #[test]
    fn base_url_without_trailing_slash() {
        let api = ApiClient::new(" http://localhost:8000/ ");
        assert_eq!(
            api.url(&ApiCall::SetDifficulty(Difficulty::Easy)),
            "http://localhost:8000/set_difficulty"
        );
    }
}
