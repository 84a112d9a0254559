use anyhow::anyhow;
use std::convert::TryFrom;

use crate::dispatcher::HandlerRequest;
use crate::model::Person;
use crate::typed::{Handler, TypedHandlerRequest};

#[derive(Debug, Clone)]
pub struct CreatePersonRequest {
    pub person: Person,
}

impl TryFrom<HandlerRequest> for CreatePersonRequest {
    type Error = anyhow::Error;

    fn try_from(req: HandlerRequest) -> Result<Self, Self::Error> {
        let body = req.body.ok_or_else(|| anyhow!("missing request body"))?;
        Ok(CreatePersonRequest {
            person: serde_json::from_value(body)?,
        })
    }
}

pub struct CreatePersonController;

impl Handler for CreatePersonController {
    type Request = CreatePersonRequest;
    type Response = Person;

    /// Echo the validated person back unchanged.
    fn handle(&self, req: TypedHandlerRequest<CreatePersonRequest>) -> Person {
        req.data.person
    }
}
