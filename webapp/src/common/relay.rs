use anyhow::bail;
use async_trait::async_trait;
use gloo_net::http::Request;
use tracing::{info, instrument};

use site::{
    SiteConfig,
    contact::{ContactSink, LogSink, Submission},
};

// posts submissions as json to a configured collaborator endpoint
#[derive(Clone, Debug)]
pub struct HttpSink {
    endpoint: String,
}

#[async_trait(?Send)]
impl ContactSink for HttpSink {
    #[instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn deliver(&self, submission: &Submission) -> anyhow::Result<()> {
        let resp = Request::post(&self.endpoint)
            .json(submission)?
            .send()
            .await?;

        if !resp.ok() {
            bail!("{} {}", resp.status(), resp.status_text());
        }

        info!("contact form delivered");
        Ok(())
    }
}

// Relay
//
// the sink the contact form actually uses.  submissions only leave the
// browser when an endpoint has been configured
#[derive(Clone, Debug)]
pub enum Relay {
    Log(LogSink),
    Http(HttpSink),
}

impl Relay {
    pub fn from_config(config: &SiteConfig) -> Self {
        match &config.contact_endpoint {
            Some(endpoint) => Relay::Http(HttpSink {
                endpoint: endpoint.clone(),
            }),
            None => Relay::Log(LogSink),
        }
    }
}

#[async_trait(?Send)]
impl ContactSink for Relay {
    async fn deliver(&self, submission: &Submission) -> anyhow::Result<()> {
        match self {
            Relay::Log(sink) => sink.deliver(submission).await,
            Relay::Http(sink) => sink.deliver(submission).await,
        }
    }
}
