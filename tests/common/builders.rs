#![allow(dead_code)]

use bunner_cors_middleware::{Cors, CorsOptions, Exchange, Headers};

pub struct RequestBuilder {
    origin: Option<String>,
    response_headers: Headers,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            origin: None,
            response_headers: Headers::new(),
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn response_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.response_headers.insert(name.into(), value.into());
        self
    }

    pub fn exchange(self) -> Exchange {
        Exchange {
            origin: self.origin,
            response_headers: self.response_headers,
        }
    }

    pub fn apply(self, cors: &Cors) -> Headers {
        let mut exchange = self.exchange();
        cors.apply(&mut exchange);
        exchange.response_headers
    }
}

pub fn cors(options: CorsOptions) -> Cors {
    Cors::new(options)
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
