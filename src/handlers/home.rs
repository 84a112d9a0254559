use serde::Serialize;
use std::convert::TryFrom;

use crate::dispatcher::HandlerRequest;
use crate::typed::{Handler, TypedHandlerRequest};

#[derive(Debug, Clone, Default)]
pub struct HomeRequest;

impl TryFrom<HandlerRequest> for HomeRequest {
    type Error = anyhow::Error;

    fn try_from(_req: HandlerRequest) -> Result<Self, Self::Error> {
        Ok(HomeRequest)
    }
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: String,
}

pub struct HomeController;

impl Handler for HomeController {
    type Request = HomeRequest;
    type Response = Greeting;

    fn handle(&self, _req: TypedHandlerRequest<HomeRequest>) -> Greeting {
        Greeting {
            hello: "World".to_string(),
        }
    }
}
