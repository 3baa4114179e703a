#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use galaxor::data_models::{SearchContentItem, SearchOptions};
use galaxor::error::UpstreamError;
use galaxor::generation_client::GenerationService;
use galaxor::relay::Relay;
use galaxor::search_client::SearchService;

pub fn sample_items(count: usize) -> Vec<SearchContentItem> {
    (0..count)
        .map(|i| SearchContentItem {
            title: format!("Result {i}"),
            url: format!("https://travel.example.com/{i}"),
            content: format!("page text {i}"),
        })
        .collect()
}

#[derive(Default)]
pub struct FakeSearch {
    pub items: Vec<SearchContentItem>,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub last_query: Mutex<Option<(String, SearchOptions)>>,
}

impl FakeSearch {
    pub fn returning(items: Vec<SearchContentItem>) -> FakeSearch {
        FakeSearch {
            items,
            ..Default::default()
        }
    }

    pub fn failing() -> FakeSearch {
        FakeSearch {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<(String, SearchOptions)> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchService for FakeSearch {
    async fn search_and_contents(
        &self,
        query: &str,
        options: SearchOptions,
    ) -> Result<Vec<SearchContentItem>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some((query.to_string(), options));
        if self.fail {
            return Err(UpstreamError::Malformed("search quota exceeded".to_string()));
        }
        Ok(self.items.clone())
    }
}

#[derive(Default)]
pub struct FakeGeneration {
    pub reply: String,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeGeneration {
    pub fn replying(reply: &str) -> FakeGeneration {
        FakeGeneration {
            reply: reply.to_string(),
            ..Default::default()
        }
    }

    pub fn failing() -> FakeGeneration {
        FakeGeneration {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationService for FakeGeneration {
    async fn generate_content(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(UpstreamError::Malformed("model unavailable".to_string()));
        }
        Ok(self.reply.clone())
    }
}

pub fn relay_with(search: Arc<FakeSearch>, generation: Arc<FakeGeneration>) -> Relay {
    Relay::new(search, generation)
}
