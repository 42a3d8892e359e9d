use crate::{config::Config, model::Item};
use async_trait::async_trait;
use simple_error::{SimpleError, SimpleResult};
use ureq::{Agent, AgentBuilder, ErrorKind};

/// Source of the item list. One call is one attempt; retrying is the caller's job.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self) -> SimpleResult<Vec<Item>>;
}

pub struct Client {
    agent: Agent,
    url: String,
}

impl Client {
    pub fn new(config: &Config) -> Self {
        Client {
            agent: AgentBuilder::new().timeout(config.timeout).build(),
            url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl Fetcher for Client {
    async fn fetch(&self) -> SimpleResult<Vec<Item>> {
        let agent = self.agent.clone();
        let url = self.url.clone();
        tokio::task::spawn_blocking(move || get_items(&agent, &url))
            .await
            .map_err(|e| SimpleError::new(format!("error fetching data: {}", e)))?
    }
}

fn get_items(agent: &Agent, url: &str) -> SimpleResult<Vec<Item>> {
    let resp = match agent.get(url).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, _)) => {
            return Err(SimpleError::new(format!(
                "API returned status code {}",
                code
            )))
        }
        Err(ureq::Error::Transport(t))
            if matches!(t.kind(), ErrorKind::InvalidUrl | ErrorKind::UnknownScheme) =>
        {
            return Err(SimpleError::new(format!("error creating request: {}", t)))
        }
        Err(e) => return Err(SimpleError::new(format!("error fetching data: {}", e))),
    };

    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(SimpleError::new(format!(
            "API returned status code {}",
            status
        )));
    }

    let body = resp
        .into_string()
        .map_err(|e| SimpleError::new(format!("error reading response body: {}", e)))?;

    serde_json::from_str(&body)
        .map_err(|e| SimpleError::new(format!("error parsing JSON: {}", e)))
}
